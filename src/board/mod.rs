//! Board representation.
//!
//! Contains coordinates and label sets, the axis-tagged relation graph,
//! pieces and their rank tables, the board itself, and the starting layout.

pub mod coord;
pub mod piece;
pub mod relation;
pub mod setup;
pub mod state;

pub use coord::{col_labels, row_labels, BoardConfig, BoardError, Coord, MAX_DIMENSION};
pub use piece::{allowed_axes, max_slide, rank_for_distance, Piece, PieceId, Rank, Side};
pub use relation::{classify, relations_from, Axis, Relation, ALL_AXES};
pub use setup::{generate_board, home_block, home_corner, place_home_pieces};
pub use state::{build_grid, Board, Cell};
