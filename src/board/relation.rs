//! Directed relations between neighbouring cells.
//!
//! Every cell owns one relation per Chebyshev neighbour, so the same pair of
//! cells yields two relations, one per direction of travel. Each relation is
//! tagged with the axis of movement it represents.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
}

/// All axes in protocol order.
pub const ALL_AXES: [Axis; 3] = [Axis::Horizontal, Axis::Vertical, Axis::Diagonal];

impl Axis {
    /// Returns the single-character protocol abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Axis::Horizontal => 'h',
            Axis::Vertical => 'v',
            Axis::Diagonal => 'd',
        }
    }

    /// Parses an axis from its single-character abbreviation.
    pub fn from_notation_char(c: char) -> Option<Axis> {
        match c {
            'h' => Some(Axis::Horizontal),
            'v' => Some(Axis::Vertical),
            'd' => Some(Axis::Diagonal),
            _ => None,
        }
    }
}

/// Classifies a step by its row and column deltas.
///
/// Zero row delta is horizontal, zero column delta is vertical, anything
/// else is diagonal. The zero step is never passed in.
pub const fn classify(d_row: i32, d_col: i32) -> Axis {
    if d_row == 0 {
        Axis::Horizontal
    } else if d_col == 0 {
        Axis::Vertical
    } else {
        Axis::Diagonal
    }
}

/// A directed, axis-tagged edge from one cell to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub source: Coord,
    pub target: Coord,
    pub axis: Axis,
}

impl Relation {
    /// Creates the relation from `source` to `target`, classifying its axis.
    pub fn between(source: Coord, target: Coord) -> Self {
        let (d_row, d_col) = displacement(source, target);
        Relation {
            source,
            target,
            axis: classify(d_row, d_col),
        }
    }

    /// Row and column displacement from source to target.
    pub fn displacement(&self) -> (i32, i32) {
        displacement(self.source, self.target)
    }

    /// The same edge travelled the other way.
    pub fn reversed(&self) -> Relation {
        Relation {
            source: self.target,
            target: self.source,
            axis: self.axis,
        }
    }
}

fn displacement(from: Coord, to: Coord) -> (i32, i32) {
    (
        to.row as i32 - from.row as i32,
        to.col as i32 - from.col as i32,
    )
}

/// Computes the relations of the cell at `coord` on a `rows` x `cols` board.
///
/// Neighbours are visited row-major over the surrounding 3x3 block, clipped
/// at the board edges, skipping the cell itself.
pub fn relations_from(coord: Coord, rows: usize, cols: usize) -> Vec<Relation> {
    let mut relations = Vec::with_capacity(8);
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(target) = coord.offset(d_row, d_col, rows, cols) {
                relations.push(Relation {
                    source: coord,
                    target,
                    axis: classify(d_row, d_col),
                });
            }
        }
    }
    relations
}
