//! Pawn state, identity and per-tick motion.
//!
//! A pawn is addressed by its slot in the arena storage. Targets are stored
//! as slot indices so clearing or replacing them never aliases another pawn.

use glam::Vec2;
use serde::Serialize;

use crate::bounds::BoundingBox;
use crate::pawn_type::PawnType;
use crate::PURSUIT_SPEED;

/// Slot of a pawn within the arena storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PawnId(pub usize);

impl PawnId {
    /// Returns the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Behaviour chosen for a pawn during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PawnState {
    /// No threat nearby and no prey anywhere; the pawn stays put.
    #[default]
    Idle,
    /// Chasing the nearest pawn of the kind it beats.
    Attacking,
    /// Fleeing a neighbour that it does not beat.
    Avoiding,
}

/// One simulated agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Pawn {
    /// Current kind; overwritten when the pawn loses a collision.
    pub kind: PawnType,
    /// Box occupied by the pawn.
    pub bounds: BoundingBox,
    /// Behaviour chosen during the last tick.
    pub state: PawnState,
    /// Pawn being chased or fled, if any.
    pub target: Option<PawnId>,
    /// Displacement applied during the last move.
    pub velocity: Vec2,
}

impl Pawn {
    /// Creates an idle pawn without a target.
    #[must_use]
    pub const fn new(kind: PawnType, bounds: BoundingBox) -> Self {
        Self {
            kind,
            bounds,
            state: PawnState::Idle,
            target: None,
            velocity: Vec2::ZERO,
        }
    }

    /// Recomputes the velocity towards (or away from) `target_centre`.
    ///
    /// Idle pawns keep their previous velocity.
    pub fn steer_towards(&mut self, target_centre: Vec2) {
        if let Some(velocity) = steering_velocity(self.bounds.centre(), target_centre, self.state) {
            self.velocity = velocity;
        }
    }

    /// Applies the velocity, wrapping around an arena of the given extent.
    pub fn advance(&mut self, extent: Vec2) {
        let next = wrapped_position(&self.bounds, self.velocity, extent);
        self.bounds.relocate(next.x, next.y);
    }
}

fn unit_step(from: f32, to: f32) -> f32 {
    if to > from {
        1.0
    } else if to < from {
        -1.0
    } else {
        0.0
    }
}

/// Velocity a pawn in `state` at `from` takes relative to a target at `to`.
///
/// Each axis moves by one unit independently, so diagonal moves are not
/// normalised. Avoiding pawns flee, attacking pawns move [`PURSUIT_SPEED`]
/// times faster. Returns `None` for [`PawnState::Idle`].
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use rochambeau::{steering_velocity, PawnState};
/// let flee = steering_velocity(Vec2::ZERO, Vec2::new(3.0, 0.0), PawnState::Avoiding);
/// assert_eq!(flee, Some(Vec2::new(-1.0, 0.0)));
/// ```
#[must_use]
pub fn steering_velocity(from: Vec2, to: Vec2, state: PawnState) -> Option<Vec2> {
    let step = Vec2::new(unit_step(from.x, to.x), unit_step(from.y, to.y));
    match state {
        PawnState::Idle => None,
        PawnState::Avoiding => Some(-step),
        PawnState::Attacking => Some(step * PURSUIT_SPEED),
    }
}

fn wrap_axis(next: f32, centre: f32, extent: f32) -> f32 {
    if centre > extent {
        centre - extent
    } else if centre < 0.0 {
        extent - centre.abs()
    } else {
        next
    }
}

/// Position reached by moving `bounds` by `velocity` inside `extent`.
///
/// Wrapping inspects the centre before the move: a pawn whose centre has
/// already left the arena is placed at the opposite side this tick, otherwise
/// it simply moves. A pawn crossing the edge therefore overshoots for one
/// tick before it is wrapped.
#[must_use]
pub fn wrapped_position(bounds: &BoundingBox, velocity: Vec2, extent: Vec2) -> Vec2 {
    let next = bounds.position() + velocity;
    let centre = bounds.centre();
    Vec2::new(
        wrap_axis(next.x, centre.x, extent.x),
        wrap_axis(next.y, centre.y, extent.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const EXTENT: Vec2 = Vec2::new(100.0, 100.0);

    fn pawn_at(x: f32, y: f32) -> Pawn {
        Pawn::new(PawnType::Rock, BoundingBox::new(x, y, 10.0, 10.0))
    }

    #[rstest]
    #[case::attack_diagonal(PawnState::Attacking, Vec2::new(5.0, 5.0), Vec2::new(1.1, 1.1))]
    #[case::attack_level(PawnState::Attacking, Vec2::new(-5.0, 0.0), Vec2::new(-1.1, 0.0))]
    #[case::avoid_diagonal(PawnState::Avoiding, Vec2::new(5.0, -5.0), Vec2::new(-1.0, 1.0))]
    #[case::avoid_coincident(PawnState::Avoiding, Vec2::ZERO, Vec2::ZERO)]
    fn steering_uses_unit_axis_steps(
        #[case] state: PawnState,
        #[case] target: Vec2,
        #[case] expected: Vec2,
    ) {
        let velocity = steering_velocity(Vec2::ZERO, target, state).expect("active state");
        assert_relative_eq!(velocity.x, expected.x);
        assert_relative_eq!(velocity.y, expected.y);
    }

    #[rstest]
    fn idle_pawn_keeps_velocity() {
        let mut pawn = pawn_at(0.0, 0.0);
        pawn.velocity = Vec2::new(1.0, -1.0);
        pawn.steer_towards(Vec2::new(50.0, 50.0));
        assert_eq!(pawn.velocity, Vec2::new(1.0, -1.0));
    }

    #[rstest]
    fn advance_moves_inside_arena() {
        let mut pawn = pawn_at(20.0, 30.0);
        pawn.velocity = Vec2::new(1.1, -1.1);
        pawn.advance(EXTENT);
        assert_relative_eq!(pawn.bounds.x(), 21.1);
        assert_relative_eq!(pawn.bounds.y(), 28.9);
    }

    #[rstest]
    #[case::past_right_edge(Vec2::new(96.0, 50.0), Vec2::new(1.0, 49.0))]
    #[case::past_left_edge(Vec2::new(-6.0, 50.0), Vec2::new(99.0, 49.0))]
    #[case::past_top_edge(Vec2::new(50.0, 96.0), Vec2::new(49.0, 1.0))]
    #[case::past_bottom_edge(Vec2::new(50.0, -6.0), Vec2::new(49.0, 99.0))]
    #[case::past_corner(Vec2::new(96.0, -6.0), Vec2::new(1.0, 99.0))]
    fn advance_wraps_from_stale_centre(#[case] start: Vec2, #[case] expected: Vec2) {
        let mut pawn = pawn_at(start.x, start.y);
        pawn.velocity = Vec2::new(-1.0, -1.0);
        pawn.advance(EXTENT);
        assert_relative_eq!(pawn.bounds.x(), expected.x);
        assert_relative_eq!(pawn.bounds.y(), expected.y);
    }

    #[rstest]
    fn crossing_the_edge_overshoots_for_one_tick() {
        let mut pawn = pawn_at(95.0, 50.0);
        pawn.velocity = Vec2::new(1.0, 0.0);

        pawn.advance(EXTENT);
        assert_relative_eq!(pawn.bounds.x(), 96.0);
        assert!(pawn.bounds.centre().x > EXTENT.x);

        pawn.advance(EXTENT);
        assert_relative_eq!(pawn.bounds.x(), 1.0);
    }
}
