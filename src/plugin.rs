//! Bevy plugin driving the arena once per frame.
//!
//! The plugin owns no simulation logic: it inserts the [`Arena`] resource,
//! ticks it from `Update` until it finishes, and turns the finishing tick into
//! a single [`SimulationFinished`] event. Resizes reach the arena through
//! [`ArenaResized`] events.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{error, info, warn};
use thiserror::Error;

use crate::arena::{Arena, TickOutcome};
use crate::config::SimulationConfig;
use crate::snapshot::Census;

/// Triggered once, on the tick where no pawn found a target.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SimulationFinished {
    /// Ticks advanced, including the finishing tick.
    pub ticks: u64,
    /// Surviving kinds.
    pub census: Census,
}

/// Trigger to update the arena extent, typically after a window resize.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ArenaResized {
    /// New arena width.
    pub width: f32,
    /// New arena height.
    pub height: f32,
}

/// Event raised when the plugin cannot build or update the arena.
#[derive(Event, Debug, Clone, Error)]
#[error("simulation error: {detail}")]
pub struct SimulationError {
    /// Description of the underlying error.
    pub detail: String,
}

impl SimulationError {
    /// Convenience constructor used by systems to emit error events.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_simulation_error(event: On<SimulationError>) {
    error!("{}", event.event());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_simulation_finished(event: On<SimulationFinished>) {
    let SimulationFinished { ticks, census } = event.event();
    info!("Simulation finished after {ticks} ticks with census {census:?}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn apply_arena_resize(
    event: On<ArenaResized>,
    arena: Option<ResMut<Arena>>,
    mut commands: Commands,
) {
    let ArenaResized { width, height } = *event.event();
    let Some(mut arena) = arena else {
        warn!("Arena resize to {width}x{height} ignored: no arena resource");
        return;
    };
    if let Err(err) = arena.notify_resize(width, height) {
        commands.trigger(SimulationError::new(err.to_string()));
    }
}

/// Run condition: an arena exists and has not finished.
#[must_use]
pub fn simulation_running(arena: Option<Res<Arena>>) -> bool {
    arena.is_some_and(|res| !res.is_finished())
}

/// Advances the arena by one tick and reports the finishing tick.
pub fn tick_arena_system(mut arena: ResMut<Arena>, mut commands: Commands) {
    if arena.tick() == TickOutcome::Finished {
        commands.trigger(SimulationFinished {
            ticks: arena.ticks(),
            census: arena.census(),
        });
    }
}

/// Bevy plugin installing the arena resource and its tick system.
#[derive(Debug, Clone, Default)]
pub struct SimulationPlugin {
    config: SimulationConfig,
}

impl SimulationPlugin {
    /// Creates a plugin seeding its arena from `config`.
    #[must_use]
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_simulation_error);
        app.add_observer(log_simulation_finished);
        app.add_observer(apply_arena_resize);

        match Arena::new(&self.config) {
            Ok(arena) => {
                app.insert_resource(arena);
            }
            Err(err) => {
                app.world_mut()
                    .trigger(SimulationError::new(err.to_string()));
                return;
            }
        }

        app.add_systems(Update, tick_arena_system.run_if(simulation_running));
    }
}
