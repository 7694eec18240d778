//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the engine main loop can dispatch on. Cell names are kept
//! as text here; the engine resolves them against its board labels.

use tracing::warn;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Handshake; engine replies with its id, options, and `hellook`.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Generate a fresh board with the starting layout.
    NewGame,

    /// Load a board from position notation.
    Position { encoded: String },

    /// Print the current position.
    Board,

    /// Print the current board as a JSON snapshot.
    Json,

    /// List the relations the piece on a cell can travel.
    Paths { cell: String },

    /// List the distinct destinations of the piece on a cell.
    Targets { cell: String },

    /// List destinations for every piece on the board.
    Hints,

    /// Move the piece on `from` to `to`.
    Move { from: String, to: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "board" => Some(Command::Board),
        "json" => Some(Command::Json),
        "hints" => Some(Command::Hints),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "paths" => single_cell(&tokens).map(|cell| Command::Paths { cell }),
        "targets" => single_cell(&tokens).map(|cell| Command::Targets { cell }),
        "move" => parse_move(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`. A bare `value` keyword counts
/// as no value; the engine rejects that for every option it knows.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let Some((&"name", rest)) = tokens[1..].split_first() else {
        warn!(line = %tokens.join(" "), "setoption without 'name'");
        return None;
    };
    let (name, value) = match rest.iter().position(|&t| t == "value") {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };
    if name.is_empty() {
        warn!(line = %tokens.join(" "), "setoption without an option name");
        return None;
    }
    Some(Command::SetOption {
        name: name.join(" "),
        value: value.filter(|v| !v.is_empty()).map(|v| v.join(" ")),
    })
}

/// Parses `position <encoded>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed position: expected 'position <encoded>'");
        return None;
    }
    Some(Command::Position {
        encoded: tokens[1].to_string(),
    })
}

/// Parses the single cell argument of `paths` and `targets`.
fn single_cell(tokens: &[&str]) -> Option<String> {
    if tokens.len() != 2 {
        warn!("malformed {}: expected '{} <cell>'", tokens[0], tokens[0]);
        return None;
    }
    Some(tokens[1].to_string())
}

/// Parses `move <from> <to>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed move: expected 'move <from> <to>'");
        return None;
    }
    Some(Command::Move {
        from: tokens[1].to_string(),
        to: tokens[2].to_string(),
    })
}
