//! Move application.
//!
//! Validates a requested move against the generated destinations and, if it
//! is legal, transfers the piece in place. A rejected move leaves the board
//! exactly as it was.

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{Board, BoardError, Coord, Piece, PieceId};
use crate::movegen::{destinations, SlidePolicy};

/// Reasons a move is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no matching piece at ({}, {})", .0.row, .0.col)]
    NotOnBoard(Coord),

    #[error("({}, {}) is not reachable from ({}, {})", .to.row, .to.col, .from.row, .from.col)]
    Illegal { from: Coord, to: Coord },
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
}

/// Moves `piece` from its recorded cell to `destination`.
///
/// The piece must be the one standing on its recorded cell, and the
/// destination must be one of its current destinations under `policy`. On
/// success the source is cleared, the destination holds the piece, and the
/// piece's recorded coord is `destination`.
pub fn apply_move(
    board: &mut Board,
    piece: &Piece,
    destination: Coord,
    policy: SlidePolicy,
) -> Result<AppliedMove, MoveError> {
    let from = piece.coord;
    board.config().check(destination)?;

    match board.piece_at(from)? {
        Some(p) if p.id == piece.id => {}
        _ => {
            warn!(?from, piece = ?piece.id, "move rejected: piece not on its recorded cell");
            return Err(MoveError::NotOnBoard(from));
        }
    }

    if board.is_occupied(destination)? || !destinations(board, from, policy)?.contains(&destination) {
        warn!(?from, to = ?destination, "move rejected: destination not reachable");
        return Err(MoveError::Illegal { from, to: destination });
    }

    match board.relocate(from, destination)? {
        Some(id) => {
            debug!(piece = ?id, ?from, to = ?destination, "applied move");
            Ok(AppliedMove { piece: id, from, to: destination })
        }
        None => Err(MoveError::NotOnBoard(from)),
    }
}

impl Board {
    /// Moves the piece on `from` to `to`, validated as in [`apply_move`].
    pub fn apply(&mut self, from: Coord, to: Coord, policy: SlidePolicy) -> Result<AppliedMove, MoveError> {
        let piece = match self.piece_at(from)? {
            Some(p) => p.clone(),
            None => {
                warn!(?from, "move rejected: no piece on source cell");
                return Err(MoveError::NotOnBoard(from));
            }
        };
        apply_move(self, &piece, to, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{generate_board, BoardConfig, Rank, Side};

    fn fresh() -> Board {
        generate_board(&BoardConfig::default())
    }

    #[test]
    fn legal_move_transfers_piece() {
        let mut board = fresh();
        let piece = board.piece_at(Coord::new(2, 0)).unwrap().unwrap().clone();
        let applied = apply_move(&mut board, &piece, Coord::new(4, 0), SlidePolicy::Blocking).unwrap();
        assert_eq!(applied, AppliedMove { piece: piece.id, from: Coord::new(2, 0), to: Coord::new(4, 0) });
        assert!(board.piece_at(Coord::new(2, 0)).unwrap().is_none());
        let moved = board.piece_at(Coord::new(4, 0)).unwrap().unwrap();
        assert_eq!(moved.id, piece.id);
        assert_eq!(moved.coord, Coord::new(4, 0));
        assert_eq!(board.pieces().count(), 18);
    }

    #[test]
    fn unreachable_destination_is_illegal() {
        let mut board = fresh();
        let before = board.clone();
        let piece = board.piece_at(Coord::new(2, 2)).unwrap().unwrap().clone();
        let err = apply_move(&mut board, &piece, Coord::new(6, 2), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::Illegal { from: Coord::new(2, 2), to: Coord::new(6, 2) });
        assert_eq!(board, before);
    }

    #[test]
    fn occupied_destination_is_illegal() {
        let mut board = fresh();
        let err = board.apply(Coord::new(0, 0), Coord::new(0, 1), SlidePolicy::Blocking).unwrap_err();
        assert!(matches!(err, MoveError::Illegal { .. }));
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut board = fresh();
        let err = board.apply(Coord::new(4, 0), Coord::new(4, 1), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::NotOnBoard(Coord::new(4, 0)));
    }

    #[test]
    fn stale_piece_is_rejected() {
        let mut board = fresh();
        let piece = board.piece_at(Coord::new(2, 0)).unwrap().unwrap().clone();
        board.apply(Coord::new(2, 0), Coord::new(3, 0), SlidePolicy::Blocking).unwrap();
        let err = apply_move(&mut board, &piece, Coord::new(4, 0), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::NotOnBoard(Coord::new(2, 0)));
    }

    #[test]
    fn impostor_piece_is_rejected() {
        let mut board = Board::new(BoardConfig::default());
        board.place_piece(Side::Upper, Coord::new(3, 1), Rank::Three).unwrap();
        let mut impostor = board.piece_at(Coord::new(3, 1)).unwrap().unwrap().clone();
        impostor.id = PieceId(99);
        let err = apply_move(&mut board, &impostor, Coord::new(4, 1), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::NotOnBoard(Coord::new(3, 1)));
    }

    #[test]
    fn out_of_range_destination_is_reported() {
        let mut board = fresh();
        let err = board.apply(Coord::new(0, 0), Coord::new(0, 9), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::Board(BoardError::OutOfRange { row: 0, col: 9 }));
        let err = board.apply(Coord::new(9, 0), Coord::new(0, 0), SlidePolicy::Blocking).unwrap_err();
        assert_eq!(err, MoveError::Board(BoardError::OutOfRange { row: 9, col: 0 }));
    }

    #[test]
    fn pass_through_cannot_land_on_occupied_cell() {
        // Under pass-through a slide may report an occupied cell; applying
        // such a move must still never stack two pieces.
        let mut board = Board::new(BoardConfig::default());
        board.place_piece(Side::Upper, Coord::new(0, 0), Rank::Three).unwrap();
        board.place_piece(Side::Lower, Coord::new(3, 0), Rank::One).unwrap();
        let targets = destinations(&board, Coord::new(0, 0), SlidePolicy::PassThrough).unwrap();
        assert!(targets.contains(&Coord::new(3, 0)));
        let err = board.apply(Coord::new(0, 0), Coord::new(3, 0), SlidePolicy::PassThrough).unwrap_err();
        assert!(matches!(err, MoveError::Illegal { .. }));
        assert_eq!(board.pieces().count(), 2);
    }
}
