//! Straight-line slide extension.
//!
//! After a first step, a slide keeps the exact displacement of that step
//! (not just its axis) until the piece's step budget runs out or the board
//! edge is reached.

use crate::board::{Board, Relation};

use super::SlidePolicy;

/// Appends the continuation of the slide begun by `first` to `out`.
///
/// At most `remaining` further relations are added, nearest first. Under
/// `SlidePolicy::Blocking` the slide stops before the first occupied cell.
pub fn extend(
    board: &Board,
    first: &Relation,
    remaining: usize,
    policy: SlidePolicy,
    out: &mut Vec<Relation>,
) {
    let step = first.displacement();
    let mut at = first.target;

    for _ in 0..remaining {
        let Ok(cell) = board.cell(at) else {
            break;
        };
        let Some(next) = cell.relations.iter().find(|r| r.displacement() == step) else {
            break;
        };
        if policy == SlidePolicy::Blocking && board.is_occupied(next.target).unwrap_or(true) {
            break;
        }
        out.push(*next);
        at = next.target;
    }
}
