//! Move resolution.
//!
//! Applies a single requested move to the board after checking it against
//! the generated destinations.

pub mod apply;

pub use apply::{apply_move, AppliedMove, MoveError};
