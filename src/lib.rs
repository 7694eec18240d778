//! cornerslide engine library.
//!
//! Exposes the board graph, destination generation, move resolution,
//! configuration, and protocol modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;

pub use board::{generate_board, Board, BoardConfig, BoardError, Coord, Piece, Relation};
pub use movegen::{possible_paths, SlidePolicy};
pub use resolve::{apply_move, AppliedMove, MoveError};
