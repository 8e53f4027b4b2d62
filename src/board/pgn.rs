//! PGN import and export.
//!
//! Import tolerates arbitrary movetext: comments, variations, NAGs, move
//! numbers and tag pairs are stripped before the remaining tokens are fed
//! through the move parser. Replays run on a scratch position and only a
//! fully successful replay is returned.

use std::collections::BTreeMap;

use log::{debug, warn};

use super::error::PgnError;
use super::fen::STARTING_FEN;
use super::{Color, Move, MoveRecord, Position};

const RESULT_TOKENS: [&str; 4] = ["1/2-1/2", "1-0", "0-1", "*"];

/// Outcome of a successful PGN replay.
#[derive(Clone, Debug)]
pub struct PgnReplay {
    pub tags: BTreeMap<String, String>,
    pub start: Position,
    pub position: Position,
    pub moves: Vec<Move>,
    pub records: Vec<MoveRecord>,
    pub result: String,
}

/// Blank out every matched `open ... close` span (no nesting).
fn strip_spans(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let Some(len) = rest[start..].find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push(' ');
        rest = &rest[start + len + close.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// Blank out matched parentheses, innermost first, so nested variations go
/// with their parent. Unmatched parentheses are left alone.
fn strip_variations(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut open = Vec::new();
    for i in 0..chars.len() {
        match chars[i] {
            '(' => open.push(i),
            ')' => {
                if let Some(start) = open.pop() {
                    chars[start..=i].iter_mut().for_each(|c| *c = ' ');
                }
            }
            _ => {}
        }
    }
    chars.into_iter().collect()
}

/// Drop `$n` numeric annotation glyphs.
fn strip_nags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek().is_some_and(char::is_ascii_digit) {
            while chars.peek().is_some_and(char::is_ascii_digit) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Split a leading move number (`12.`, `12...`) off a token. Returns the
/// remainder, which is empty for a bare move number.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }
    let after_digits = &token[digits..];
    let dots = after_digits.len() - after_digits.trim_start_matches('.').len();
    if dots == 0 {
        return token;
    }
    &after_digits[dots.min(3)..]
}

/// Move tokens of a PGN text, in order.
///
/// # Example
/// ```
/// use chess_rules::board::pgn_move_tokens;
///
/// let tokens = pgn_move_tokens("1. e4 {best by test} e5 (1... c5 2. Nf3) 2.Nf3 $1 1-0");
/// assert_eq!(tokens, vec!["e4", "e5", "Nf3"]);
/// ```
pub fn pgn_move_tokens(text: &str) -> Vec<String> {
    let without_braces = strip_spans(text, '{', '}');
    let without_line_comments: String = without_braces
        .lines()
        .map(|line| line.split(';').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");
    let without_tags = strip_spans(&without_line_comments, '[', ']');
    let cleaned = strip_nags(&strip_variations(&without_tags));

    cleaned
        .split_whitespace()
        .filter(|token| !token.starts_with('[') && !token.ends_with(']'))
        .map(strip_move_number)
        .filter(|token| !token.is_empty() && !RESULT_TOKENS.contains(token))
        .map(str::to_string)
        .collect()
}

/// The result token a PGN text ends with, or `*` if there is none.
pub fn pgn_result(text: &str) -> String {
    let trimmed = text.trim_end();
    RESULT_TOKENS
        .iter()
        .find(|result| trimmed.ends_with(*result))
        .map_or("*", |result| *result)
        .to_string()
}

/// Tag pairs such as `[Event "Casual"]`, one per line.
pub fn pgn_tags(text: &str) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for line in text.lines() {
        let trimmed = line.trim();
        let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            continue;
        };
        let Some((key, value)) = inner.trim().split_once(char::is_whitespace) else {
            continue;
        };
        let value = value.trim().trim_matches('"').replace("\\\"", "\"");
        tags.insert(key.to_string(), value);
    }
    tags
}

/// Replay a PGN text. A `[FEN "..."]` tag sets the starting position,
/// otherwise the game starts from the standard position.
pub fn replay_pgn(text: &str) -> Result<PgnReplay, PgnError> {
    let tags = pgn_tags(text);
    let start = match tags.get("FEN") {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::new(),
    };
    let mut replay = replay_pgn_from(&start, text)?;
    replay.tags = tags;
    Ok(replay)
}

/// Replay the movetext of a PGN text from `start`. The first token that does
/// not resolve to a legal move aborts the whole replay.
pub fn replay_pgn_from(start: &Position, text: &str) -> Result<PgnReplay, PgnError> {
    let tokens = pgn_move_tokens(text);
    let mut position = start.clone();
    let mut moves = Vec::with_capacity(tokens.len());
    let mut records = Vec::with_capacity(tokens.len());

    for (ply, token) in tokens.into_iter().enumerate() {
        let mv = match position.parse_move(&token) {
            Ok(mv) => mv,
            Err(source) => {
                warn!("PGN replay stopped at ply {ply} on '{token}': {source}");
                return Err(PgnError::UnmatchedToken { ply, token, source });
            }
        };
        records.push(position.record(mv));
        moves.push(mv);
        position.play(mv);
    }

    debug!("replayed {} PGN moves", moves.len());
    Ok(PgnReplay {
        tags: BTreeMap::new(),
        start: start.clone(),
        position,
        moves,
        records,
        result: pgn_result(text),
    })
}

/// Movetext with move numbers: `1. e4 e5 2. Nf3`. A game where Black moved
/// first opens with `1... <move>`. The result is appended unless it is `*`.
pub fn build_pgn_text(records: &[MoveRecord], start_side: Color, result: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(records.len() * 3 / 2 + 2);
    let offset = usize::from(start_side == Color::Black);
    let mut i = 0;

    if offset == 1 {
        if let Some(first) = records.first() {
            parts.push("1...".to_string());
            parts.push(first.display_text().to_string());
            i = 1;
        }
    }

    while i < records.len() {
        parts.push(format!("{}.", 1 + (i + offset) / 2));
        parts.push(records[i].display_text().to_string());
        if let Some(reply) = records.get(i + 1) {
            parts.push(reply.display_text().to_string());
        }
        i += 2;
    }

    if let Some(result) = result.filter(|r| *r != "*") {
        parts.push(result.to_string());
    }

    parts.join(" ")
}

/// Full PGN: `SetUp`/`FEN` tags when the game did not start from the
/// standard position, then the movetext.
pub fn write_pgn(start: &Position, records: &[MoveRecord], result: Option<&str>) -> String {
    let movetext = build_pgn_text(records, start.side_to_move(), result);
    let fen = start.to_fen();
    if fen == STARTING_FEN {
        movetext
    } else {
        format!("[SetUp \"1\"]\n[FEN \"{fen}\"]\n\n{movetext}")
    }
}
