//! Position notation.
//!
//! A compact single-token encoding of a whole board, in the spirit of chess
//! FEN:
//!
//! `<rows>x<cols>/<pieces>`
//!
//! `pieces` is `-` for an empty board, or a comma-separated list of
//! `<side><rank><cell>` entries such as `u3a1` (upper side, rank 3, on a1).
//! Entries are written in row-major cell order.

use thiserror::Error;

use crate::board::{Board, BoardConfig, BoardError, Rank, Side};

/// Errors that can occur during position parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected 2 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid dimensions '{0}'")]
    InvalidDimensions(String),

    #[error("position is {found_rows}x{found_cols} but the board is {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("invalid piece entry: '{0}'")]
    InvalidEntry(String),

    #[error("invalid side character: '{0}'")]
    InvalidSide(char),

    #[error("invalid rank character: '{0}'")]
    InvalidRank(char),

    #[error("duplicate piece at '{0}'")]
    DuplicatePiece(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

fn parse_dimensions(s: &str) -> Result<(usize, usize), PositionError> {
    let invalid = || PositionError::InvalidDimensions(s.to_string());
    let (rows, cols) = s.split_once('x').ok_or_else(invalid)?;
    let rows = rows.parse::<usize>().map_err(|_| invalid())?;
    let cols = cols.parse::<usize>().map_err(|_| invalid())?;
    Ok((rows, cols))
}

fn parse_pieces(s: &str, board: &mut Board) -> Result<(), PositionError> {
    if s == "-" {
        return Ok(());
    }

    for entry in s.split(',') {
        let mut chars = entry.chars();
        let (side_char, rank_char) = match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(PositionError::InvalidEntry(entry.to_string())),
        };
        let cell = chars.as_str();
        if cell.is_empty() {
            return Err(PositionError::InvalidEntry(entry.to_string()));
        }

        let side = Side::from_notation_char(side_char).ok_or(PositionError::InvalidSide(side_char))?;
        let rank = rank_char
            .to_digit(10)
            .and_then(|d| Rank::from_value(d as u8))
            .ok_or(PositionError::InvalidRank(rank_char))?;
        let coord = board.config().parse_cell(cell)?;

        if board.place_piece(side, coord, rank)?.is_none() {
            return Err(PositionError::DuplicatePiece(cell.to_string()));
        }
    }

    Ok(())
}

/// Parses a position onto a fresh board with the given labels.
///
/// The encoded dimensions must match the configuration.
pub fn parse_position(s: &str, config: &BoardConfig) -> Result<Board, PositionError> {
    let sections: Vec<&str> = s.split('/').collect();
    if sections.len() != 2 {
        return Err(PositionError::WrongSectionCount(sections.len()));
    }

    let (found_rows, found_cols) = parse_dimensions(sections[0])?;
    if (found_rows, found_cols) != (config.rows(), config.cols()) {
        return Err(PositionError::DimensionMismatch {
            rows: config.rows(),
            cols: config.cols(),
            found_rows,
            found_cols,
        });
    }

    let mut board = Board::new(config.clone());
    parse_pieces(sections[1], &mut board)?;
    Ok(board)
}

/// Encodes a board into its canonical position string.
pub fn encode_position(board: &Board) -> Result<String, BoardError> {
    let mut entries = Vec::new();
    for piece in board.pieces() {
        entries.push(format!(
            "{}{}{}",
            piece.side.notation_char(),
            piece.rank.value(),
            board.config().cell_name(piece.coord)?
        ));
    }

    let pieces = if entries.is_empty() {
        "-".to_string()
    } else {
        entries.join(",")
    };
    Ok(format!("{}x{}/{}", board.rows(), board.cols(), pieces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{generate_board, Coord};

    const INITIAL: &str = "8x4/u3a1,u3b1,u2c1,u3a2,u2b2,u1c2,u2a3,u1b3,u1c3,\
l1b6,l1c6,l2d6,l1b7,l2c7,l3d7,l2b8,l3c8,l3d8";

    #[test]
    fn encode_initial_board() {
        let board = generate_board(&BoardConfig::default());
        assert_eq!(encode_position(&board).unwrap(), INITIAL);
    }

    #[test]
    fn parse_initial_board() {
        let parsed = parse_position(INITIAL, &BoardConfig::default()).unwrap();
        let generated = generate_board(&BoardConfig::default());
        assert_eq!(parsed.pieces().count(), 18);
        for (a, b) in parsed.pieces().zip(generated.pieces()) {
            assert_eq!((a.side, a.rank, a.coord), (b.side, b.rank, b.coord));
        }
    }

    #[test]
    fn empty_board() {
        let board = parse_position("8x4/-", &BoardConfig::default()).unwrap();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(encode_position(&board).unwrap(), "8x4/-");
    }

    #[test]
    fn parsed_piece_carries_rank_rules() {
        let board = parse_position("8x4/l2c5", &BoardConfig::default()).unwrap();
        let piece = board.piece_at(Coord::new(4, 2)).unwrap().unwrap();
        assert_eq!(piece.side, Side::Lower);
        assert_eq!(piece.rank, Rank::Two);
        assert_eq!(piece.max_slide, 2);
    }

    #[test]
    fn error_section_count() {
        let config = BoardConfig::default();
        assert_eq!(parse_position("8x4", &config).unwrap_err(), PositionError::WrongSectionCount(1));
        assert_eq!(parse_position("8x4/-/-", &config).unwrap_err(), PositionError::WrongSectionCount(3));
    }

    #[test]
    fn error_dimensions() {
        let config = BoardConfig::default();
        assert!(matches!(parse_position("8by4/-", &config), Err(PositionError::InvalidDimensions(_))));
        assert!(matches!(parse_position("ax4/-", &config), Err(PositionError::InvalidDimensions(_))));
        assert!(matches!(
            parse_position("6x6/-", &config),
            Err(PositionError::DimensionMismatch { found_rows: 6, .. })
        ));
    }

    #[test]
    fn error_entries() {
        let config = BoardConfig::default();
        assert_eq!(parse_position("8x4/x3a1", &config).unwrap_err(), PositionError::InvalidSide('x'));
        assert_eq!(parse_position("8x4/u4a1", &config).unwrap_err(), PositionError::InvalidRank('4'));
        assert!(matches!(parse_position("8x4/u3", &config), Err(PositionError::InvalidEntry(_))));
        assert!(matches!(parse_position("8x4/u", &config), Err(PositionError::InvalidEntry(_))));
        assert!(matches!(parse_position("8x4/u3z9", &config), Err(PositionError::Board(_))));
        assert_eq!(
            parse_position("8x4/u3a1,l1a1", &config).unwrap_err(),
            PositionError::DuplicatePiece("a1".to_string())
        );
    }
}
