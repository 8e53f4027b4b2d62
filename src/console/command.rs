/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    New,
    Fen(String),
    Move(String),
    Go(Option<u32>),
    Moves,
    Pgn,
    LoadPgn(String),
    Set { name: String, value: String },
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Text after the first word, with its inner spacing kept.
fn rest_of_line<'a>(trimmed: &'a str, keyword: &str) -> &'a str {
    trimmed[keyword.len()..].trim()
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let keyword = *parts.first()?;

    let cmd = match keyword.to_ascii_lowercase().as_str() {
        "new" => ConsoleCommand::New,
        "fen" => ConsoleCommand::Fen(rest_of_line(trimmed, keyword).to_string()),
        "move" | "m" => match parts.get(1) {
            Some(token) => ConsoleCommand::Move((*token).to_string()),
            None => ConsoleCommand::Unknown(trimmed.to_string()),
        },
        "go" => ConsoleCommand::Go(parts.get(1).and_then(|v| v.parse::<u32>().ok())),
        "moves" => ConsoleCommand::Moves,
        "pgn" => ConsoleCommand::Pgn,
        "loadpgn" => ConsoleCommand::LoadPgn(rest_of_line(trimmed, keyword).to_string()),
        "set" => match (parts.get(1), parts.get(2)) {
            (Some(name), Some(value)) => ConsoleCommand::Set {
                name: (*name).to_string(),
                value: (*value).to_string(),
            },
            _ => ConsoleCommand::Unknown(trimmed.to_string()),
        },
        "show" | "d" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
