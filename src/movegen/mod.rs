//! Legal destination generation.
//!
//! Computes, for the piece on a cell, every relation it can travel: the
//! first steps onto empty neighbours along its allowed axes, followed by the
//! straight-line continuation of each first step up to its slide limit.

pub mod slide;

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError, Cell, Coord, Relation};

/// How occupied cells affect a slide after its first step.
///
/// The first step never lands on an occupied cell under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlidePolicy {
    /// A slide stops before the first occupied cell in its path.
    #[default]
    Blocking,
    /// Only the first step checks occupancy; the slide continues through and
    /// onto occupied cells.
    PassThrough,
}

impl SlidePolicy {
    pub const fn name(self) -> &'static str {
        match self {
            SlidePolicy::Blocking => "blocking",
            SlidePolicy::PassThrough => "passthrough",
        }
    }
}

impl fmt::Display for SlidePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlidePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blocking" => Ok(SlidePolicy::Blocking),
            "passthrough" => Ok(SlidePolicy::PassThrough),
            other => Err(format!("unknown slide policy '{}'", other)),
        }
    }
}

/// Returns every relation the piece on `cell` may travel.
///
/// First steps come first, in the cell's relation order; then the
/// continuation of each first step in the same order, nearest cell first.
/// Returns an empty vec if the cell holds no piece.
pub fn possible_paths(board: &Board, cell: &Cell, policy: SlidePolicy) -> Vec<Relation> {
    let piece = match &cell.piece {
        Some(p) => p,
        None => return Vec::new(),
    };

    let first_steps: Vec<Relation> = cell
        .relations
        .iter()
        .filter(|r| piece.allows(r.axis))
        .filter(|r| matches!(board.is_occupied(r.target), Ok(false)))
        .copied()
        .collect();

    let remaining = piece.max_slide.saturating_sub(1);
    let mut paths = first_steps.clone();
    if remaining > 0 {
        for first in &first_steps {
            slide::extend(board, first, remaining, policy, &mut paths);
        }
    }
    paths
}

/// Like [`possible_paths`], addressed by coordinate.
pub fn paths_from(board: &Board, coord: Coord, policy: SlidePolicy) -> Result<Vec<Relation>, BoardError> {
    let cell = board.cell(coord)?;
    Ok(possible_paths(board, cell, policy))
}

/// Returns the distinct cells the piece at `coord` can move to, in first-seen order.
pub fn destinations(board: &Board, coord: Coord, policy: SlidePolicy) -> Result<Vec<Coord>, BoardError> {
    let paths = paths_from(board, coord, policy)?;
    Ok(unique_targets(&paths))
}

fn unique_targets(paths: &[Relation]) -> Vec<Coord> {
    let mut targets: Vec<Coord> = Vec::with_capacity(paths.len());
    for rel in paths {
        if !targets.contains(&rel.target) {
            targets.push(rel.target);
        }
    }
    targets
}

/// Computes destinations for every occupied cell in parallel.
///
/// Results are in row-major cell order.
pub fn all_paths(board: &Board, policy: SlidePolicy) -> Vec<(Coord, Vec<Coord>)> {
    board
        .cells()
        .par_iter()
        .filter(|cell| cell.piece.is_some())
        .map(|cell| (cell.coord, unique_targets(&possible_paths(board, cell, policy))))
        .collect()
}
