//! Simulation constants shared by the behaviour and arena systems.
//!
//! The rule set is fixed; only the arena extent, population size and pawn
//! size are configurable through [`crate::SimulationConfig`].

/// Centre-to-centre distance under which a non-favourable neighbour is fled.
pub const THREAT_RADIUS: f32 = 50.0;
/// Speed multiplier applied to a pawn chasing its prey.
pub const PURSUIT_SPEED: f32 = 1.1;
/// Number of pawns seeded into a fresh arena.
pub const DEFAULT_POPULATION: usize = 100;
/// Edge length of the square box every pawn occupies.
pub const DEFAULT_PAWN_SIZE: f32 = 10.0;
/// Arena width used when none is supplied.
pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
/// Arena height used when none is supplied.
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
