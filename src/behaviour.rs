//! Per-tick target selection.
//!
//! A pawn scans the whole population in storage order. Any neighbour it does
//! not beat (including one of its own kind) within [`THREAT_RADIUS`] is fled
//! immediately; otherwise the nearest pawn it beats is chased.

use crate::pawn::{Pawn, PawnId, PawnState};
use crate::THREAT_RADIUS;

/// Target and behaviour picked for one pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetChoice {
    /// Pawn to chase or flee.
    pub target: PawnId,
    /// [`PawnState::Attacking`] or [`PawnState::Avoiding`].
    pub state: PawnState,
}

/// Picks the target of `seeker` among `pawns`.
///
/// The first threat found within [`THREAT_RADIUS`] wins outright and stops
/// the scan, even when a prey was already recorded. Among prey, the strictly
/// nearest wins and ties keep the first encountered. Returns `None` when
/// there is neither a threat in range nor any prey, or when `seeker` is not
/// a valid slot.
#[must_use]
pub fn select_target(pawns: &[Pawn], seeker: PawnId) -> Option<TargetChoice> {
    let hunter = pawns.get(seeker.index())?;
    let origin = hunter.bounds.centre();
    let mut nearest_prey = f32::MAX;
    let mut choice = None;

    for (slot, other) in pawns.iter().enumerate() {
        if slot == seeker.index() {
            continue;
        }

        let distance = origin.distance(other.bounds.centre());
        let is_prey = other.kind == hunter.kind.prey();

        if !is_prey && distance < THREAT_RADIUS {
            return Some(TargetChoice {
                target: PawnId(slot),
                state: PawnState::Avoiding,
            });
        }

        if is_prey && distance < nearest_prey {
            nearest_prey = distance;
            choice = Some(TargetChoice {
                target: PawnId(slot),
                state: PawnState::Attacking,
            });
        }
    }

    choice
}
