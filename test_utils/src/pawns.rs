//! Convenience constructors for pawns and arenas used in tests.

use glam::Vec2;
use rochambeau::{Arena, BoundingBox, Pawn, PawnId, PawnType, DEFAULT_PAWN_SIZE};

/// Create an idle pawn with the default box size at `(x, y)`.
///
/// # Examples
/// ```
/// use rochambeau::PawnType;
/// use test_utils::pawn_at;
/// let pawn = pawn_at(PawnType::Rock, 5.0, 5.0);
/// assert_eq!(pawn.bounds.centre().x, 10.0);
/// ```
#[must_use]
pub fn pawn_at(kind: PawnType, x: f32, y: f32) -> Pawn {
    Pawn::new(
        kind,
        BoundingBox::new(x, y, DEFAULT_PAWN_SIZE, DEFAULT_PAWN_SIZE),
    )
}

/// Build an arena of the given extent from `(kind, x, y)` placements.
///
/// # Panics
/// Panics if the extent is not finite and positive.
#[must_use]
pub fn arena_of(width: f32, height: f32, placements: &[(PawnType, f32, f32)]) -> Arena {
    let pawns = placements
        .iter()
        .map(|&(kind, x, y)| pawn_at(kind, x, y))
        .collect();
    Arena::from_pawns(width, height, pawns).expect("fixture arena extent must be valid")
}

/// Arena wrapper with panicking accessors for terse assertions.
#[derive(Debug, Clone)]
pub struct ArenaFixture {
    /// Wrapped arena.
    pub arena: Arena,
}

impl ArenaFixture {
    /// Wrap an arena built by [`arena_of`].
    #[must_use]
    pub fn new(width: f32, height: f32, placements: &[(PawnType, f32, f32)]) -> Self {
        Self {
            arena: arena_of(width, height, placements),
        }
    }

    /// The pawn in `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is outside the population.
    #[must_use]
    pub fn pawn(&self, slot: usize) -> &Pawn {
        self.arena
            .pawn(PawnId(slot))
            .unwrap_or_else(|| panic!("no pawn in slot {slot}"))
    }

    /// Low corner of the pawn in `slot`.
    #[must_use]
    pub fn position(&self, slot: usize) -> Vec2 {
        self.pawn(slot).bounds.position()
    }

    /// Kinds of every pawn in storage order.
    #[must_use]
    pub fn kinds(&self) -> Vec<PawnType> {
        self.arena.pawns().iter().map(|p| p.kind).collect()
    }
}
