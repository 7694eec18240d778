//! JSON board snapshot for renderers.

use serde::Serialize;

use crate::board::{Board, BoardError, PieceId, Side};

/// A piece as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub id: PieceId,
    pub side: Side,
    pub rank: u8,
}

/// One cell as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub cell: String,
    pub row: usize,
    pub col: usize,
    pub piece: Option<PieceView>,
}

/// The labels and every cell of a board, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    pub fn of(board: &Board) -> Result<Self, BoardError> {
        let config = board.config();
        let cells = board
            .cells()
            .iter()
            .map(|c| {
                Ok(CellView {
                    cell: config.cell_name(c.coord)?,
                    row: c.coord.row,
                    col: c.coord.col,
                    piece: c.piece.as_ref().map(|p| PieceView {
                        id: p.id,
                        side: p.side,
                        rank: p.rank.value(),
                    }),
                })
            })
            .collect::<Result<Vec<_>, BoardError>>()?;
        Ok(BoardSnapshot {
            rows: config.row_labels().to_vec(),
            cols: config.col_labels().to_vec(),
            cells,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
