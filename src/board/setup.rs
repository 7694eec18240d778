//! Starting position.
//!
//! Each side fills the 3x3 block nearest its home corner. A piece's rank
//! comes from how far it starts from that corner, counted as row offset plus
//! column offset.

use tracing::debug;

use super::coord::{BoardConfig, Coord};
use super::piece::{rank_for_distance, Rank, Side};
use super::state::Board;

/// Side length of the home block.
pub const HOME_BLOCK: usize = 3;

/// Returns the corner cell a side starts from.
pub fn home_corner(side: Side, rows: usize, cols: usize) -> Coord {
    match side {
        Side::Upper => Coord::new(0, 0),
        Side::Lower => Coord::new(rows.saturating_sub(1), cols.saturating_sub(1)),
    }
}

/// Lists the home-block placements for a side, clipped to the board.
///
/// Cells are ordered by row offset, then column offset, from the corner.
pub fn home_block(side: Side, rows: usize, cols: usize) -> Vec<(Coord, Rank)> {
    let corner = home_corner(side, rows, cols);
    let toward: i32 = match side {
        Side::Upper => 1,
        Side::Lower => -1,
    };
    let mut block = Vec::with_capacity(HOME_BLOCK * HOME_BLOCK);
    for row_off in 0..HOME_BLOCK {
        for col_off in 0..HOME_BLOCK {
            let d_row = toward * row_off as i32;
            let d_col = toward * col_off as i32;
            if let Some(coord) = corner.offset(d_row, d_col, rows, cols) {
                block.push((coord, rank_for_distance(row_off + col_off)));
            }
        }
    }
    block
}

/// Places both home blocks onto an empty board.
///
/// Cells already taken (the blocks overlap on small boards) are skipped; the
/// upper block is placed first.
pub fn place_home_pieces(board: &mut Board) {
    let (rows, cols) = (board.rows(), board.cols());
    for side in [Side::Upper, Side::Lower] {
        for (coord, rank) in home_block(side, rows, cols) {
            match board.place_piece(side, coord, rank) {
                Ok(Some(_)) => {}
                Ok(None) => debug!(?side, ?coord, "home cell already occupied, skipping"),
                Err(e) => debug!(?side, ?coord, error = %e, "home cell off board, skipping"),
            }
        }
    }
}

/// Builds and populates a fresh game board.
pub fn generate_board(config: &BoardConfig) -> Board {
    let mut board = Board::new(config.clone());
    place_home_pieces(&mut board);
    debug!(
        rows = board.rows(),
        cols = board.cols(),
        pieces = board.pieces().count(),
        "generated board"
    );
    board
}
