//! Headless driver running a Rochambeau simulation to completion.
use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Context};
use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use clap::Parser;
use log::{error, warn};
use rochambeau::{
    init_logging, Arena, RunSummary, SimulationConfig, SimulationFinished, SimulationPlugin,
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_PAWN_SIZE, DEFAULT_POPULATION,
};

/// A self-running rock/paper/scissors pawn simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Arena width in world units
    #[arg(long, default_value_t = DEFAULT_ARENA_WIDTH)]
    width: f32,
    /// Arena height in world units
    #[arg(long, default_value_t = DEFAULT_ARENA_HEIGHT)]
    height: f32,
    /// Number of pawns placed at startup
    #[arg(short = 'n', long, default_value_t = DEFAULT_POPULATION)]
    population: usize,
    /// Seed for reproducible placement
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks even if pawns still have targets
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Minimum wall-clock time per frame in milliseconds
    #[arg(long, default_value_t = 0)]
    frame_ms: u64,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Resource, Debug, Clone, Copy)]
struct ReportSettings {
    max_ticks: u64,
    json: bool,
}

fn write_summary(summary: &RunSummary, json: bool) {
    let rendered = if json {
        serde_json::to_string_pretty(summary).map_err(anyhow::Error::from)
    } else {
        let mut kinds: Vec<_> = summary.census.iter().collect();
        kinds.sort();
        let census = kinds
            .iter()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        let verdict = if summary.finished {
            "finished"
        } else {
            "stopped"
        };
        Ok(format!("{verdict} after {} ticks: {census}", summary.ticks))
    };

    let written = rendered.and_then(|text| {
        writeln!(std::io::stdout().lock(), "{text}").context("writing run summary")
    });
    if let Err(err) = written {
        error!("Failed to report run summary: {err:#}");
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn report_and_exit(
    event: On<SimulationFinished>,
    settings: Res<ReportSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    let SimulationFinished { ticks, census } = event.event();
    write_summary(
        &RunSummary {
            ticks: *ticks,
            finished: true,
            census: census.clone(),
        },
        settings.json,
    );
    exit.write(AppExit::Success);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn enforce_tick_limit(
    arena: Res<Arena>,
    settings: Res<ReportSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    if arena.is_finished() || arena.ticks() < settings.max_ticks {
        return;
    }
    warn!("Tick limit of {} reached before the run finished", settings.max_ticks);
    write_summary(
        &RunSummary {
            ticks: arena.ticks(),
            finished: false,
            census: arena.census(),
        },
        settings.json,
    );
    exit.write(AppExit::Success);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SimulationConfig {
        width: args.width,
        height: args.height,
        population: args.population,
        pawn_size: DEFAULT_PAWN_SIZE,
        seed: args.seed,
    };
    config.validate().context("invalid simulation configuration")?;

    let runner = ScheduleRunnerPlugin::run_loop(Duration::from_millis(args.frame_ms));
    let exit = App::new()
        .add_plugins(MinimalPlugins.set(runner))
        .insert_resource(ReportSettings {
            max_ticks: args.max_ticks,
            json: args.json,
        })
        .add_observer(report_and_exit)
        .add_plugins(SimulationPlugin::new(config))
        .add_systems(PostUpdate, enforce_tick_limit)
        .run();

    if let AppExit::Error(code) = exit {
        bail!("simulation exited with code {code}");
    }
    Ok(())
}
