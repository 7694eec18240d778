//! The board graph.
//!
//! Holds every cell of an R x C board with its classified relations and its
//! optional occupant. Cells and relations are created once; afterwards only
//! occupancy changes, and it changes in place through `&mut Board`.

use super::coord::{BoardConfig, BoardError, Coord};
use super::piece::{Piece, PieceId, Rank, Side};
use super::relation::{relations_from, Relation};

/// A single board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub relations: Vec<Relation>,
    pub piece: Option<Piece>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// Creates one empty, unconnected cell per (row, col) pair in row-major order.
pub fn build_grid(config: &BoardConfig) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(config.rows() * config.cols());
    for row in 0..config.rows() {
        for col in 0..config.cols() {
            cells.push(Cell {
                coord: Coord::new(row, col),
                relations: Vec::new(),
                piece: None,
            });
        }
    }
    cells
}

/// The full R x C board graph for one game.
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
    next_id: u32,
}

impl Board {
    /// Builds the grid and classifies every cell's relations. No pieces.
    pub fn new(config: BoardConfig) -> Self {
        let mut cells = build_grid(&config);
        let (rows, cols) = (config.rows(), config.cols());
        for cell in &mut cells {
            cell.relations = relations_from(cell.coord, rows, cols);
        }
        Board {
            config,
            cells,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        let coord = self.config.check(coord)?;
        Ok(coord.row * self.cols() + coord.col)
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, BoardError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, BoardError> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Returns the cell named by notation such as `a1`.
    pub fn cell_named(&self, name: &str) -> Result<&Cell, BoardError> {
        let coord = self.config.parse_cell(name)?;
        self.cell(coord)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the piece at `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Result<Option<&Piece>, BoardError> {
        Ok(self.cell(coord)?.piece.as_ref())
    }

    pub fn is_occupied(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(self.cell(coord)?.piece.is_some())
    }

    /// Iterates over every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().filter_map(|c| c.piece.as_ref())
    }

    /// Returns the piece with the given identity.
    pub fn find_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id == id)
    }

    /// Places a new piece of `rank` at `coord`.
    ///
    /// Returns `Ok(None)` without changing anything if the cell is occupied,
    /// and `BoardError::PieceLimit` once every piece id has been handed out.
    pub fn place_piece(&mut self, side: Side, coord: Coord, rank: Rank) -> Result<Option<PieceId>, BoardError> {
        let (rows, cols) = (self.rows(), self.cols());
        let id = PieceId(self.next_id);
        let next_id = self.next_id.checked_add(1).ok_or(BoardError::PieceLimit)?;
        let cell = self.cell_mut(coord)?;
        if cell.piece.is_some() {
            return Ok(None);
        }
        cell.piece = Some(Piece::new(id, side, coord, rank, rows, cols));
        self.next_id = next_id;
        Ok(Some(id))
    }

    /// Moves whatever stands on `from` to `to` and updates its recorded coord.
    ///
    /// Both coordinates must already be validated and `to` must be empty.
    /// Nothing is touched when `from` is empty.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> Result<Option<PieceId>, BoardError> {
        let to_idx = self.index(to)?;
        let from_idx = self.index(from)?;
        let Some(mut piece) = self.cells[from_idx].piece.take() else {
            return Ok(None);
        };
        piece.coord = to;
        let id = piece.id;
        self.cells[to_idx].piece = Some(piece);
        Ok(Some(id))
    }
}
