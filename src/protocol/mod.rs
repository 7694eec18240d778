//! Line protocol handling.
//!
//! Parsing and serialization for the text protocol spoken by the engine
//! binary. Relations and whole positions have compact text notations; the
//! command parser feeds the main loop, and renderers can ask for a JSON
//! snapshot of the board.

pub mod notation;
pub mod parser;
pub mod position;
pub mod snapshot;

pub use notation::{format_relation, format_relations, parse_relation, parse_relations, NotationError};
pub use parser::{parse_command, Command};
pub use position::{encode_position, parse_position, PositionError};
pub use snapshot::{BoardSnapshot, CellView, PieceView};
