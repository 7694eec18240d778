//! Pieces, ranks, and the movement-rule tables derived from rank.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::relation::Axis;

/// Which home corner a piece started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Home corner at the first row and first column.
    Upper,
    /// Home corner at the last row and last column.
    Lower,
}

impl Side {
    /// Returns the single-character position-notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Side::Upper => 'u',
            Side::Lower => 'l',
        }
    }

    /// Parses a side from its single-character abbreviation.
    pub fn from_notation_char(c: char) -> Option<Side> {
        match c {
            'u' => Some(Side::Upper),
            'l' => Some(Side::Lower),
            _ => None,
        }
    }
}

/// A piece's movement class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Rank {
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            _ => None,
        }
    }
}

/// Maps a starting distance from the home corner to a rank.
///
/// The corner itself and its direct neighbours are rank 3.
pub const fn rank_for_distance(distance: usize) -> Rank {
    match distance {
        0 | 1 => Rank::Three,
        2 => Rank::Two,
        _ => Rank::One,
    }
}

/// Axes a piece of the given rank may move along.
pub const fn allowed_axes(rank: Rank) -> &'static [Axis] {
    match rank {
        Rank::Three => &[Axis::Horizontal, Axis::Vertical, Axis::Diagonal],
        Rank::Two => &[Axis::Horizontal, Axis::Vertical],
        Rank::One => &[Axis::Diagonal],
    }
}

/// Maximum number of steps in one slide on a `rows` x `cols` board.
///
/// Rank 3 may cross the whole board: its limit is the board diameter minus one.
pub fn max_slide(rank: Rank, rows: usize, cols: usize) -> usize {
    match rank {
        Rank::Three => rows.max(cols).saturating_sub(1),
        Rank::Two => 2,
        Rank::One => 1,
    }
}

/// Stable identity of a piece within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

/// A piece on the board.
///
/// The movement attributes are fixed at construction from the rank; `coord`
/// is kept in step with the cell holding the piece by the move applicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub coord: Coord,
    pub rank: Rank,
    pub allowed_axes: Vec<Axis>,
    pub max_slide: usize,
}

impl Piece {
    /// Creates a piece with the movement rules of `rank` on a `rows` x `cols` board.
    pub fn new(id: PieceId, side: Side, coord: Coord, rank: Rank, rows: usize, cols: usize) -> Self {
        Piece {
            id,
            side,
            coord,
            rank,
            allowed_axes: allowed_axes(rank).to_vec(),
            max_slide: max_slide(rank, rows, cols),
        }
    }

    pub fn allows(&self, axis: Axis) -> bool {
        self.allowed_axes.contains(&axis)
    }
}
