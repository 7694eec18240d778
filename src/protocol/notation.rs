//! Relation notation.
//!
//! A relation is written `<source>-<target> <axis>`, e.g. `a1-a2 v`. Cells use
//! the board's labels (column then row) and the axis is one of `h`, `v`, `d`.
//! Lists of relations are joined with ` ; `.

use thiserror::Error;

use crate::board::{Axis, BoardConfig, BoardError, Relation};

/// Errors that can occur when parsing relation notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("malformed relation '{0}'")]
    Malformed(String),

    #[error("unknown axis '{0}'")]
    UnknownAxis(String),

    #[error("axis '{found}' does not match cells, expected '{expected}'")]
    AxisMismatch { expected: char, found: char },

    #[error("cells are not adjacent: '{0}'")]
    NotAdjacent(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Formats one relation.
pub fn format_relation(rel: &Relation, config: &BoardConfig) -> Result<String, BoardError> {
    Ok(format!(
        "{}-{} {}",
        config.cell_name(rel.source)?,
        config.cell_name(rel.target)?,
        rel.axis.notation_char()
    ))
}

/// Formats a list of relations separated by ` ; `.
pub fn format_relations(rels: &[Relation], config: &BoardConfig) -> Result<String, BoardError> {
    let parts = rels
        .iter()
        .map(|r| format_relation(r, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" ; "))
}

/// Parses one relation, checking that the cells are neighbours and the axis
/// agrees with their displacement.
pub fn parse_relation(s: &str, config: &BoardConfig) -> Result<Relation, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    let (cells, axis) = s
        .split_once(' ')
        .ok_or_else(|| NotationError::Malformed(s.to_string()))?;
    let (source, target) = cells
        .split_once('-')
        .ok_or_else(|| NotationError::Malformed(s.to_string()))?;

    let mut axis_chars = axis.trim().chars();
    let axis = match (axis_chars.next(), axis_chars.next()) {
        (Some(c), None) => {
            Axis::from_notation_char(c).ok_or_else(|| NotationError::UnknownAxis(axis.to_string()))?
        }
        _ => return Err(NotationError::UnknownAxis(axis.to_string())),
    };

    let source = config.parse_cell(source)?;
    let target = config.parse_cell(target)?;
    let rel = Relation::between(source, target);
    let (d_row, d_col) = rel.displacement();
    if (d_row, d_col) == (0, 0) || d_row.abs() > 1 || d_col.abs() > 1 {
        return Err(NotationError::NotAdjacent(s.to_string()));
    }
    if rel.axis != axis {
        return Err(NotationError::AxisMismatch {
            expected: rel.axis.notation_char(),
            found: axis.notation_char(),
        });
    }
    Ok(rel)
}

/// Parses a ` ; `-separated list of relations. An empty string is an empty list.
pub fn parse_relations(s: &str, config: &BoardConfig) -> Result<Vec<Relation>, NotationError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(" ; ").map(|part| parse_relation(part, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn format_corner_relations() {
        let config = BoardConfig::default();
        let rel = Relation::between(Coord::new(0, 0), Coord::new(1, 0));
        assert_eq!(format_relation(&rel, &config).unwrap(), "a1-a2 v");
        let rel = Relation::between(Coord::new(0, 0), Coord::new(0, 1));
        assert_eq!(format_relation(&rel, &config).unwrap(), "a1-b1 h");
        let rel = Relation::between(Coord::new(0, 0), Coord::new(1, 1));
        assert_eq!(format_relation(&rel, &config).unwrap(), "a1-b2 d");
    }

    #[test]
    fn parse_valid_relation() {
        let config = BoardConfig::default();
        let rel = parse_relation("c3-d4 d", &config).unwrap();
        assert_eq!(rel.source, Coord::new(2, 2));
        assert_eq!(rel.target, Coord::new(3, 3));
        assert_eq!(rel.axis, Axis::Diagonal);
    }

    #[test]
    fn parse_list_matches_format() {
        let config = BoardConfig::default();
        let rels = vec![
            Relation::between(Coord::new(0, 0), Coord::new(1, 0)),
            Relation::between(Coord::new(1, 0), Coord::new(2, 0)),
        ];
        let text = format_relations(&rels, &config).unwrap();
        assert_eq!(text, "a1-a2 v ; a2-a3 v");
        assert_eq!(parse_relations(&text, &config).unwrap(), rels);
        assert!(parse_relations("", &config).unwrap().is_empty());
    }

    #[test]
    fn parse_errors() {
        let config = BoardConfig::default();
        assert_eq!(parse_relation("", &config), Err(NotationError::EmptyInput));
        assert!(matches!(parse_relation("a1a2 v", &config), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_relation("a1-a2", &config), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_relation("a1-a2 x", &config), Err(NotationError::UnknownAxis(_))));
        assert!(matches!(parse_relation("a1-a2 vv", &config), Err(NotationError::UnknownAxis(_))));
        assert!(matches!(parse_relation("a1-a3 v", &config), Err(NotationError::NotAdjacent(_))));
        assert!(matches!(parse_relation("a1-a1 v", &config), Err(NotationError::NotAdjacent(_))));
        assert!(matches!(parse_relation("a1-e1 h", &config), Err(NotationError::Board(_))));
        assert_eq!(
            parse_relation("a1-b1 v", &config),
            Err(NotationError::AxisMismatch { expected: 'h', found: 'v' })
        );
    }
}
