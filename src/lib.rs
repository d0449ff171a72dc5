#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Rochambeau simulation engine.
//! Rock, paper and scissors pawns chase their prey, flee everything else and
//! convert each other on contact until nobody has anything left to chase.
pub mod arena;
pub mod behaviour;
pub mod bounds;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pawn;
pub mod pawn_type;
pub mod plugin;
pub mod snapshot;
pub use constants::*;

// Re-export commonly used items
pub use arena::{Arena, TickOutcome, TickReport};
pub use behaviour::{select_target, TargetChoice};
pub use bounds::BoundingBox;
pub use collision::{touches, SweepOrder};
pub use config::SimulationConfig;
pub use error::ArenaError;
pub use logging::init as init_logging;
pub use pawn::{steering_velocity, wrapped_position, Pawn, PawnId, PawnState};
pub use pawn_type::{beats, PawnType};
pub use plugin::{
    simulation_running, tick_arena_system, ArenaResized, SimulationError, SimulationFinished,
    SimulationPlugin,
};
pub use snapshot::{census, Census, PawnSnapshot, RunSummary};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use rochambeau::prelude::*;
    //! ```

    pub use crate::Arena;
    pub use crate::BoundingBox;
    pub use crate::Pawn;
    pub use crate::PawnType;
    pub use crate::SimulationConfig;
    pub use crate::SimulationPlugin;
    pub use crate::TickOutcome;
}
