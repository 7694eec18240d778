//! Engine state management.
//!
//! Holds the current board and configuration between protocol commands and
//! writes each command's response to the given output.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::board::{generate_board, Board, Coord};
use crate::config::{ConfigError, EngineConfig};
use crate::movegen::{all_paths, destinations, paths_from};
use crate::protocol::notation::format_relations;
use crate::protocol::position::{encode_position, parse_position, PositionError};
use crate::protocol::snapshot::BoardSnapshot;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub config: EngineConfig,
    pub board: Board,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Creates an engine with a freshly generated board.
    pub fn new(config: EngineConfig) -> Self {
        let board = generate_board(&config.board);
        Engine { config, board }
    }

    /// Replaces the board with a freshly generated one.
    pub fn new_game(&mut self) {
        self.board = generate_board(&self.config.board);
        info!(
            rows = self.board.rows(),
            cols = self.board.cols(),
            policy = %self.config.slide_policy,
            "new game"
        );
    }

    /// Loads a board from position notation. The board is unchanged on error.
    pub fn set_position(&mut self, encoded: &str) -> Result<(), PositionError> {
        self.board = parse_position(encoded, &self.config.board)?;
        Ok(())
    }

    /// Sets an engine option. Board size changes take effect at the next
    /// `newgame` or `position`.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        self.config.set_option(name, value)
    }

    fn cell(&self, name: &str) -> Result<Coord, String> {
        self.board
            .config()
            .parse_cell(name)
            .map_err(|e| e.to_string())
    }

    fn name(&self, coord: Coord) -> String {
        self.board
            .config()
            .cell_name(coord)
            .unwrap_or_else(|_| format!("({},{})", coord.row, coord.col))
    }

    /// Handles the handshake: writes id, options, and `hellook`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name cornerslide")?;
        writeln!(out, "option name Rows type spin default {}", self.config.board.rows())?;
        writeln!(out, "option name Cols type spin default {}", self.config.board.cols())?;
        writeln!(
            out,
            "option name SlidePolicy type combo default {} var blocking var passthrough",
            self.config.slide_policy
        )?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Writes the current position.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match encode_position(&self.board) {
            Ok(encoded) => writeln!(out, "position {}", encoded)?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Writes the board as one line of JSON.
    pub fn handle_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = BoardSnapshot::of(&self.board)
            .map_err(|e| e.to_string())
            .and_then(|snap| snap.to_json().map_err(|e| e.to_string()));
        match json {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Writes every relation the piece on `cell` may travel.
    pub fn handle_paths<W: Write>(&self, cell: &str, out: &mut W) -> io::Result<()> {
        let paths = self.cell(cell).and_then(|coord| {
            let rels = paths_from(&self.board, coord, self.config.slide_policy).map_err(|e| e.to_string())?;
            format_relations(&rels, self.board.config()).map_err(|e| e.to_string())
        });
        match paths {
            Ok(text) if text.is_empty() => writeln!(out, "paths")?,
            Ok(text) => writeln!(out, "paths {}", text)?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Writes the distinct destinations of the piece on `cell`.
    pub fn handle_targets<W: Write>(&self, cell: &str, out: &mut W) -> io::Result<()> {
        let targets = self.cell(cell).and_then(|coord| {
            destinations(&self.board, coord, self.config.slide_policy).map_err(|e| e.to_string())
        });
        match targets {
            Ok(targets) => {
                write!(out, "targets")?;
                for t in targets {
                    write!(out, " {}", self.name(t))?;
                }
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Writes a `hint` line for every piece on the board.
    pub fn handle_hints<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (coord, targets) in all_paths(&self.board, self.config.slide_policy) {
            write!(out, "hint {}", self.name(coord))?;
            for t in targets {
                write!(out, " {}", self.name(t))?;
            }
            writeln!(out)?;
        }
        out.flush()
    }

    /// Applies a move and reports `moved` or `illegal`.
    pub fn handle_move<W: Write>(&mut self, from: &str, to: &str, out: &mut W) -> io::Result<()> {
        let policy = self.config.slide_policy;
        let result = match (self.cell(from), self.cell(to)) {
            (Ok(f), Ok(t)) => self.board.apply(f, t, policy).map_err(|e| e.to_string()),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        match result {
            Ok(applied) => {
                writeln!(out, "moved {} {}", self.name(applied.from), self.name(applied.to))?;
            }
            Err(reason) => {
                debug!(from, to, %reason, "illegal move");
                writeln!(out, "illegal {}", reason)?;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::SlidePolicy;

    fn output<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn new_engine_has_initial_board() {
        let engine = Engine::default();
        assert_eq!(engine.board.pieces().count(), 18);
        assert_eq!(engine.config.slide_policy, SlidePolicy::Blocking);
    }

    #[test]
    fn hello_outputs_handshake() {
        let engine = Engine::default();
        let out = output(|o| engine.handle_hello(o));
        assert!(out.contains("id name cornerslide"));
        assert!(out.contains("option name SlidePolicy"));
        assert_eq!(out.lines().last(), Some("hellook"));
    }

    #[test]
    fn isready_outputs_readyok() {
        let engine = Engine::default();
        assert_eq!(output(|o| engine.handle_isready(o)).trim(), "readyok");
    }

    #[test]
    fn paths_lists_corner_relations() {
        let mut engine = Engine::default();
        engine.set_position("8x4/u3a1").unwrap();
        let out = output(|o| engine.handle_paths("a1", o));
        assert!(out.starts_with("paths a1-b1 h ; a1-a2 v ; a1-b2 d"));
        assert!(out.contains("a2-a3 v"));
        assert!(out.contains("b2-c3 d"));
    }

    #[test]
    fn paths_on_empty_cell_is_bare() {
        let engine = Engine::default();
        assert_eq!(output(|o| engine.handle_paths("a5", o)).trim(), "paths");
    }

    #[test]
    fn unknown_cell_reports_error() {
        let engine = Engine::default();
        assert!(output(|o| engine.handle_paths("q1", o)).starts_with("error "));
        assert!(output(|o| engine.handle_targets("a0", o)).starts_with("error "));
    }

    #[test]
    fn targets_for_rank_two() {
        let engine = Engine::default();
        assert_eq!(output(|o| engine.handle_targets("a3", o)).trim(), "targets a4 a5");
    }

    #[test]
    fn move_then_board() {
        let mut engine = Engine::default();
        let out = output(|o| engine.handle_move("a3", "a5", o));
        assert_eq!(out.trim(), "moved a3 a5");
        let out = output(|o| engine.handle_board(o));
        assert!(out.contains("u2a5"));
        assert!(!out.contains("u2a3"));
    }

    #[test]
    fn illegal_move_reports_and_keeps_board() {
        let mut engine = Engine::default();
        let before = engine.board.clone();
        let out = output(|o| engine.handle_move("a1", "a2", o));
        assert!(out.starts_with("illegal "));
        let out = output(|o| engine.handle_move("zz", "a2", o));
        assert!(out.starts_with("illegal "));
        assert_eq!(engine.board, before);
    }

    #[test]
    fn hints_cover_every_piece() {
        let engine = Engine::default();
        let out = output(|o| engine.handle_hints(o));
        assert_eq!(out.lines().count(), 18);
        assert!(out.lines().all(|l| l.starts_with("hint ")));
        assert!(out.lines().any(|l| l == "hint a3 a4 a5"));
    }

    #[test]
    fn json_is_single_line() {
        let engine = Engine::default();
        let out = output(|o| engine.handle_json(o));
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["cells"].as_array().unwrap().len(), 32);
    }

    #[test]
    fn bad_position_keeps_board() {
        let mut engine = Engine::default();
        let before = engine.board.clone();
        assert!(engine.set_position("garbage").is_err());
        assert_eq!(engine.board, before);
    }

    #[test]
    fn resize_applies_at_new_game() {
        let mut engine = Engine::default();
        engine.set_option("Rows", Some("5")).unwrap();
        assert_eq!(engine.board.rows(), 8);
        engine.new_game();
        assert_eq!(engine.board.rows(), 5);
        assert_eq!(engine.board.cols(), 4);
    }
}
