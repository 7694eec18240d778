//! Coordinates and board label sets.
//!
//! A board is addressed by ordered row and column label sets. Internally
//! every cell is a `Coord` of zero-based indices into those sets; labels only
//! matter for notation (`a1` is column `a`, row `1`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of rows on a fresh board.
pub const DEFAULT_ROWS: usize = 8;

/// Default number of columns on a fresh board.
pub const DEFAULT_COLS: usize = 4;

/// Largest number of rows or columns a board may have.
pub const MAX_DIMENSION: usize = 256;

/// Errors raised when addressing cells or validating label sets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },

    #[error("unknown cell '{0}'")]
    UnknownCell(String),

    #[error("invalid label set: {0}")]
    InvalidLabels(String),

    #[error("board size {rows}x{cols} exceeds the {max}x{max} limit")]
    TooLarge { rows: usize, cols: usize, max: usize },

    #[error("no piece ids left on this board")]
    PieceLimit,
}

/// A cell position as row and column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate shifted by `(d_row, d_col)`, or `None` when it
    /// would leave a `rows` x `cols` board.
    pub fn offset(self, d_row: i32, d_col: i32, rows: usize, cols: usize) -> Option<Coord> {
        let row = self.row as i64 + d_row as i64;
        let col = self.col as i64 + d_col as i64;
        if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

/// Ordered row and column label sets describing a board.
///
/// Deserializes from `{"rows": [...], "cols": [...]}`; missing fields fall
/// back to the standard 8x4 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_row_labels")]
    rows: Vec<String>,
    #[serde(default = "default_col_labels")]
    cols: Vec<String>,
}

fn default_row_labels() -> Vec<String> {
    row_labels(DEFAULT_ROWS)
}

fn default_col_labels() -> Vec<String> {
    col_labels(DEFAULT_COLS)
}

/// Numeric row labels `1..=n`.
pub fn row_labels(n: usize) -> Vec<String> {
    (0..n).map(row_label).collect()
}

/// Alphabetic column labels `a, b, ..., z, aa, ab, ...`.
pub fn col_labels(n: usize) -> Vec<String> {
    (0..n).map(col_label).collect()
}

fn row_label(i: usize) -> String {
    (i + 1).to_string()
}

fn col_label(mut i: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'a' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

fn check_size(rows: usize, cols: usize) -> Result<(), BoardError> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(BoardError::TooLarge {
            rows,
            cols,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: default_row_labels(),
            cols: default_col_labels(),
        }
    }
}

impl BoardConfig {
    /// Builds a configuration from explicit label sets.
    pub fn new(rows: Vec<String>, cols: Vec<String>) -> Result<Self, BoardError> {
        let config = Self { rows, cols };
        config.validate()?;
        Ok(config)
    }

    /// Builds a `rows` x `cols` configuration with the standard labels.
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        check_size(rows, cols)?;
        Self::new(row_labels(rows), col_labels(cols))
    }

    /// Resizes to `rows` x `cols`, keeping the existing labels that still fit.
    /// New rows and columns get the standard label for their index.
    pub fn resized(&self, rows: usize, cols: usize) -> Result<Self, BoardError> {
        check_size(rows, cols)?;
        let keep = |labels: &[String], n: usize, standard: fn(usize) -> String| -> Vec<String> {
            (0..n)
                .map(|i| labels.get(i).cloned().unwrap_or_else(|| standard(i)))
                .collect()
        };
        Self::new(keep(&self.rows, rows, row_label), keep(&self.cols, cols, col_label))
    }

    /// Checks that both label sets are non-empty, free of duplicates, and no
    /// longer than [`MAX_DIMENSION`].
    pub fn validate(&self) -> Result<(), BoardError> {
        check_size(self.rows.len(), self.cols.len())?;
        for (what, labels) in [("row", &self.rows), ("column", &self.cols)] {
            if labels.is_empty() {
                return Err(BoardError::InvalidLabels(format!("no {} labels", what)));
            }
            for (i, label) in labels.iter().enumerate() {
                if label.is_empty() {
                    return Err(BoardError::InvalidLabels(format!("empty {} label", what)));
                }
                if labels[..i].contains(label) {
                    return Err(BoardError::InvalidLabels(format!(
                        "duplicate {} label '{}'",
                        what, label
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols.len()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    pub fn col_labels(&self) -> &[String] {
        &self.cols
    }

    /// Returns the coordinate if it lies on the board.
    pub fn check(&self, coord: Coord) -> Result<Coord, BoardError> {
        if coord.row >= self.rows() || coord.col >= self.cols() {
            return Err(BoardError::OutOfRange {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(coord)
    }

    /// Looks up a cell by its row and column labels.
    pub fn coord_of(&self, row: &str, col: &str) -> Result<Coord, BoardError> {
        let r = self.rows.iter().position(|l| l == row);
        let c = self.cols.iter().position(|l| l == col);
        match (r, c) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => Err(BoardError::UnknownCell(format!("{}{}", col, row))),
        }
    }

    /// Parses cell notation: a column label immediately followed by a row label.
    ///
    /// The longest matching column label wins, so multi-letter columns work.
    pub fn parse_cell(&self, s: &str) -> Result<Coord, BoardError> {
        let mut best: Option<Coord> = None;
        let mut best_len = 0;
        for (col, label) in self.cols.iter().enumerate() {
            if label.len() <= best_len {
                continue;
            }
            if let Some(rest) = s.strip_prefix(label.as_str()) {
                if let Some(row) = self.rows.iter().position(|l| l == rest) {
                    best = Some(Coord::new(row, col));
                    best_len = label.len();
                }
            }
        }
        best.ok_or_else(|| BoardError::UnknownCell(s.to_string()))
    }

    /// Formats a coordinate as cell notation.
    pub fn cell_name(&self, coord: Coord) -> Result<String, BoardError> {
        self.check(coord)?;
        Ok(format!("{}{}", self.cols[coord.col], self.rows[coord.row]))
    }
}
