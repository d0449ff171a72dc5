//! Broad-phase collision sweep and type conversion.
//!
//! Pawns are ordered by the x coordinate of their box with a stable sort and
//! swept left to right. Only pawns whose x lies before the sweeping pawn's
//! high x are examined, then a two-corner containment test decides whether
//! the pair touches.

use log::trace;
use ordered_float::OrderedFloat;

use crate::pawn::{Pawn, PawnId};
use crate::pawn_type::PawnType;

/// Reusable x-ordering of the population.
///
/// The ordering references storage slots and is rebuilt every tick; the
/// population storage itself is never reordered.
#[derive(Debug, Clone, Default)]
pub struct SweepOrder {
    entries: Vec<(OrderedFloat<f32>, PawnId)>,
}

impl SweepOrder {
    /// Rebuilds the ordering from the current box positions.
    ///
    /// Pawns sharing an x coordinate keep their storage order.
    pub fn rebuild(&mut self, pawns: &[Pawn]) {
        self.entries.clear();
        self.entries.extend(
            pawns
                .iter()
                .enumerate()
                .map(|(slot, pawn)| (OrderedFloat(pawn.bounds.x()), PawnId(slot))),
        );
        self.entries.sort_by_key(|&(x, _)| x);
    }

    /// Slots in ascending x order.
    pub fn slots(&self) -> impl Iterator<Item = PawnId> + '_ {
        self.entries.iter().map(|&(_, id)| id)
    }

    /// Sweeps the ordering and converts the loser of every touching pair.
    ///
    /// Returns the number of conversions. Kinds changed earlier in the sweep
    /// are seen by later pairs.
    pub fn resolve(&self, pawns: &mut [Pawn]) -> usize {
        let mut conversions = 0;
        for (index, sweeper) in self.slots().enumerate() {
            let Some(reach) = pawns.get(sweeper.index()).map(|p| p.bounds.high().x) else {
                continue;
            };
            for &(x, candidate) in self.entries.iter().skip(index + 1) {
                if x.into_inner() >= reach {
                    break;
                }
                if convert_pair(pawns, sweeper, candidate) {
                    conversions += 1;
                }
            }
        }
        conversions
    }
}

/// Returns `true` when `sweeper`'s box contains the low or high corner of
/// `candidate`'s box.
///
/// Boxes overlapping only along an edge region that excludes both corners
/// are not detected.
#[must_use]
pub fn touches(sweeper: &Pawn, candidate: &Pawn) -> bool {
    let low = candidate.bounds.position();
    let high = candidate.bounds.high();
    sweeper.bounds.contains(low.x, low.y) || sweeper.bounds.contains(high.x, high.y)
}

fn convert_pair(pawns: &mut [Pawn], sweeper: PawnId, candidate: PawnId) -> bool {
    let (Some(left), Some(right)) = (pawns.get(sweeper.index()), pawns.get(candidate.index()))
    else {
        return false;
    };
    if left.kind == right.kind || !touches(left, right) {
        return false;
    }

    let winner = PawnType::winner(left.kind, right.kind);
    trace!(
        "collision between {sweeper:?} ({}) and {candidate:?} ({}): {winner} wins",
        left.kind,
        right.kind
    );

    for id in [sweeper, candidate] {
        if let Some(pawn) = pawns.get_mut(id.index()) {
            pawn.kind = winner;
            pawn.target = None;
        }
    }
    true
}
