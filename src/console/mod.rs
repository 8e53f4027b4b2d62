//! Line-oriented console for playing and inspecting games.
//!
//! Not an engine protocol: one plain command per line, replies are printed
//! as text. Run `help` for the command list.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::board::{
    FenError, Game, GameStatus, MoveParseError, MoveRecord, PgnError, SearchError,
};

pub mod command;
pub mod options;

pub use command::{parse_console_command, ConsoleCommand};
pub use options::ConsoleOptions;

const HELP: &[&str] = &[
    "new                 start a new game",
    "fen <fen>           set up a position",
    "move <san|coord>    play a move (also: m)",
    "go [depth]          let the engine move for the side to move",
    "moves               list legal moves",
    "pgn                 print the game as PGN",
    "loadpgn <movetext>  replace the game with a PGN replay",
    "set <name> <value>  depth <n> | engine white|black|none | legality strict|reference",
    "show                print the board",
    "quit                leave",
];

/// Error type for console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Invalid FEN in a `fen` command
    InvalidFen(FenError),
    /// Move text that does not resolve to a legal move
    InvalidMove(MoveParseError),
    /// PGN that could not be replayed
    InvalidPgn(PgnError),
    /// Engine search refused the position
    Search(SearchError),
    /// `set` with an option name the console does not know
    UnknownOption { name: String },
    /// `set` with a value the option does not accept
    InvalidValue { name: String, value: String },
    /// Unrecognized or incomplete command
    UnknownCommand(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CommandError::InvalidMove(e) => write!(f, "{e}"),
            CommandError::InvalidPgn(e) => write!(f, "{e}"),
            CommandError::Search(e) => write!(f, "Cannot search: {e}"),
            CommandError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            CommandError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            CommandError::UnknownCommand(line) => {
                write!(f, "Unknown command '{line}', try 'help'")
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidFen(e) => Some(e),
            CommandError::InvalidMove(e) => Some(e),
            CommandError::InvalidPgn(e) => Some(e),
            CommandError::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for CommandError {
    fn from(e: FenError) -> Self {
        CommandError::InvalidFen(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

impl From<PgnError> for CommandError {
    fn from(e: PgnError) -> Self {
        CommandError::InvalidPgn(e)
    }
}

impl From<SearchError> for CommandError {
    fn from(e: SearchError) -> Self {
        CommandError::Search(e)
    }
}

/// A game plus the console's settings.
#[derive(Clone, Debug, Default)]
pub struct Console {
    game: Game,
    options: ConsoleOptions,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConsoleOptions) -> Self {
        Console {
            game: Game::new(),
            options,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    /// Run one command and return the lines to print.
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<Vec<String>, CommandError> {
        let mut out = Vec::new();
        match command {
            ConsoleCommand::New => {
                self.game = Game::new();
                out.push("New game".to_string());
                self.engine_reply(&mut out)?;
            }
            ConsoleCommand::Fen(fen) => {
                self.game.load_fen(&fen)?;
                out.push(self.game.position().to_fen());
                self.engine_reply(&mut out)?;
            }
            ConsoleCommand::Move(token) => {
                let record = self.game.play_token(&token)?;
                out.push(format!("You play {}", record.display_text()));
                self.report_status(&mut out);
                self.engine_reply(&mut out)?;
            }
            ConsoleCommand::Go(depth) => {
                let config = self.options.search_config(depth);
                match self.game.engine_move(&config)? {
                    Some(record) => out.push(engine_line(&record)),
                    None => out.push("No move to play".to_string()),
                }
                self.report_status(&mut out);
            }
            ConsoleCommand::Moves => {
                let position = self.game.position();
                let sans: Vec<String> = position
                    .legal_moves()
                    .iter()
                    .map(|&mv| position.san(mv))
                    .collect();
                out.push(sans.join(" "));
            }
            ConsoleCommand::Pgn => out.push(self.game.to_pgn()),
            ConsoleCommand::LoadPgn(text) => {
                self.game.load_pgn(&text)?;
                out.push(format!("Loaded {} moves", self.game.moves().len()));
                self.report_status(&mut out);
            }
            ConsoleCommand::Set { name, value } => {
                self.options.apply_set(&name, &value)?;
                out.push(format!("{name} set to {value}"));
            }
            ConsoleCommand::Show => {
                let position = self.game.position();
                out.extend(position.board().to_string().lines().map(str::to_string));
                out.push(format!("FEN: {}", position.to_fen()));
                out.push(format!("{} to move, {}", position.side_to_move(), self.game.outcome()));
            }
            ConsoleCommand::Help => out.extend(HELP.iter().map(|line| (*line).to_string())),
            ConsoleCommand::Quit => {}
            ConsoleCommand::Unknown(line) => return Err(CommandError::UnknownCommand(line)),
        }
        Ok(out)
    }

    /// Answer automatically when the engine owns the side to move.
    fn engine_reply(&mut self, out: &mut Vec<String>) -> Result<(), CommandError> {
        let to_move = self.game.position().side_to_move();
        if self.options.engine_side != Some(to_move) || self.game.outcome() != GameStatus::Ongoing {
            return Ok(());
        }
        let config = self.options.search_config(None);
        if let Some(record) = self.game.engine_move(&config)? {
            out.push(engine_line(&record));
            self.report_status(out);
        }
        Ok(())
    }

    fn report_status(&self, out: &mut Vec<String>) {
        let status = self.game.outcome();
        if status != GameStatus::Ongoing {
            out.push(format!("Game over: {status} ({})", status.result_token()));
        }
    }
}

fn engine_line(record: &MoveRecord) -> String {
    format!("Engine plays {}", record.display_text())
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_console<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut console = Console::new();
    info!("console started");

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_console_command(&line) else {
            continue;
        };
        if command == ConsoleCommand::Quit {
            break;
        }
        match console.execute(command) {
            Ok(lines) => {
                for text in lines {
                    writeln!(output, "{text}")?;
                }
            }
            Err(e) => {
                warn!("command '{}' failed: {e}", line.trim());
                writeln!(output, "Error: {e}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

/// Console on standard input and output.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(stdin.lock(), stdout.lock())
}
