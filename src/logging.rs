//! Logger bootstrap for the command line driver and tests.
//!
//! Ticks are reported at `debug`, conversions at `trace` and run completion at
//! `info`. Verbose mode raises only this crate's modules so Bevy's own
//! scheduling chatter stays at `info`.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> String {
    if verbose {
        format!(
            "{},{}={}",
            LevelFilter::Info,
            env!("CARGO_CRATE_NAME"),
            LevelFilter::Debug
        )
    } else {
        LevelFilter::Info.to_string()
    }
}

/// Initializes the global logger.
///
/// `verbose` enables per-tick summaries from the simulation. `RUST_LOG`
/// overrides the default, e.g. `RUST_LOG=rochambeau::collision=trace`
/// follows every conversion.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);

    // A logger installed earlier (another test, an embedding app) stays.
    let _ = builder.try_init();
}
