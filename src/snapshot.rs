//! Read-only views of the population for renderers and reports.

use hashbrown::HashMap;
use serde::Serialize;

use crate::pawn::{Pawn, PawnId, PawnState};
use crate::pawn_type::PawnType;

/// What a renderer needs to draw one pawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PawnSnapshot {
    /// Storage slot of the pawn.
    pub id: PawnId,
    /// Current kind.
    pub kind: PawnType,
    /// Low corner x.
    pub x: f32,
    /// Low corner y.
    pub y: f32,
    /// Behaviour chosen during the last tick.
    pub state: PawnState,
}

impl PawnSnapshot {
    /// Captures `pawn` stored at `id`.
    #[must_use]
    pub const fn capture(id: PawnId, pawn: &Pawn) -> Self {
        Self {
            id,
            kind: pawn.kind,
            x: pawn.bounds.x(),
            y: pawn.bounds.y(),
            state: pawn.state,
        }
    }
}

/// Number of pawns per kind. Kinds with no pawns are absent.
pub type Census = HashMap<PawnType, usize>;

/// Counts the pawns of each kind.
#[must_use]
pub fn census(pawns: &[Pawn]) -> Census {
    let mut counts = Census::new();
    for pawn in pawns {
        *counts.entry(pawn.kind).or_insert(0) += 1;
    }
    counts
}

/// Outcome of a full run, written by the command line driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Ticks advanced, including the finishing tick.
    pub ticks: u64,
    /// Whether the run ended because no pawn found a target.
    pub finished: bool,
    /// Surviving kinds.
    pub census: Census,
}
