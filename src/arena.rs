//! The arena owns the population and advances it one tick at a time.
//!
//! A tick has two phases. First every pawn, in storage order, picks a target,
//! steers and moves; later pawns see the positions earlier pawns reached this
//! tick. Then the population is swept along the x axis and touching pawns of
//! different kinds convert. When no pawn finds a target the arena finishes
//! and the sweep is skipped.

use bevy::prelude::Resource;
use glam::Vec2;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::behaviour::select_target;
use crate::bounds::BoundingBox;
use crate::collision::SweepOrder;
use crate::config::SimulationConfig;
use crate::error::{validate_extent, ArenaError};
use crate::pawn::{Pawn, PawnId, PawnState};
use crate::snapshot::{census, Census, PawnSnapshot};

/// Counters describing a tick that did not finish the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tick number, starting at one.
    pub tick: u64,
    /// Pawns that held a target and moved.
    pub pursuing: usize,
    /// Pawns converted during the collision sweep.
    pub conversions: usize,
}

/// Result of [`Arena::tick`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one pawn held a target this tick.
    Continuing(TickReport),
    /// No pawn found a target; the run is over.
    Finished,
}

/// Population of pawns sharing one arena.
#[derive(Resource, Debug, Clone)]
pub struct Arena {
    pawns: Vec<Pawn>,
    extent: Vec2,
    ticks: u64,
    finished: bool,
    sweep: SweepOrder,
}

impl Arena {
    /// Seeds a new arena from `config`.
    ///
    /// Uses the configured seed when present, entropy otherwise.
    ///
    /// # Errors
    /// Returns [`ArenaError`] when the configuration is invalid.
    pub fn new(config: &SimulationConfig) -> Result<Self, ArenaError> {
        let mut rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self::with_rng(config, &mut rng)
    }

    /// Seeds a new arena from `config`, drawing placement and kinds from `rng`.
    ///
    /// Pawns are placed at whole-unit positions in `[0, width) × [0, height)`.
    ///
    /// # Errors
    /// Returns [`ArenaError`] when the configuration is invalid.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ArenaError> {
        config.validate()?;
        let pawns = (0..config.population)
            .map(|_| {
                let x = rng.gen_range(0.0..config.width).floor();
                let y = rng.gen_range(0.0..config.height).floor();
                Pawn::new(
                    rng.gen(),
                    BoundingBox::new(x, y, config.pawn_size, config.pawn_size),
                )
            })
            .collect();
        let arena = Self::from_pawns(config.width, config.height, pawns)?;
        info!(
            "Arena seeded with {} pawns in {}x{}",
            arena.pawns.len(),
            config.width,
            config.height
        );
        Ok(arena)
    }

    /// Builds an arena around an explicit population.
    ///
    /// # Errors
    /// Returns [`ArenaError::InvalidDimensions`] for an unusable extent.
    ///
    /// # Examples
    /// ```
    /// use rochambeau::{Arena, BoundingBox, Pawn, PawnType};
    /// let pawns = vec![Pawn::new(PawnType::Rock, BoundingBox::new(0.0, 0.0, 10.0, 10.0))];
    /// let arena = Arena::from_pawns(100.0, 100.0, pawns).unwrap();
    /// assert_eq!(arena.pawns().len(), 1);
    /// ```
    pub fn from_pawns(width: f32, height: f32, pawns: Vec<Pawn>) -> Result<Self, ArenaError> {
        validate_extent(width, height)?;
        Ok(Self {
            pawns,
            extent: Vec2::new(width, height),
            ticks: 0,
            finished: false,
            sweep: SweepOrder::default(),
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Returns [`TickOutcome::Finished`] on the first tick where no pawn
    /// acquires a target, and on every call after that without touching the
    /// population again.
    pub fn tick(&mut self) -> TickOutcome {
        if self.finished {
            return TickOutcome::Finished;
        }
        self.ticks += 1;

        let pursuing = self.move_pawns();
        if pursuing == 0 {
            self.finished = true;
            info!(
                "Simulation finished after {} ticks: {:?}",
                self.ticks,
                self.census()
            );
            return TickOutcome::Finished;
        }

        self.sweep.rebuild(&self.pawns);
        let conversions = self.sweep.resolve(&mut self.pawns);
        debug!(
            "Tick {}: {pursuing} pawns pursuing, {conversions} conversions",
            self.ticks
        );

        TickOutcome::Continuing(TickReport {
            tick: self.ticks,
            pursuing,
            conversions,
        })
    }

    /// Selects targets and moves every pawn; returns how many held a target.
    fn move_pawns(&mut self) -> usize {
        let mut pursuing = 0;
        for slot in 0..self.pawns.len() {
            let choice = select_target(&self.pawns, PawnId(slot));
            let target_centre = choice
                .and_then(|c| self.pawns.get(c.target.index()))
                .map(|target| target.bounds.centre());
            let Some(pawn) = self.pawns.get_mut(slot) else {
                continue;
            };

            let (Some(choice), Some(centre)) = (choice, target_centre) else {
                pawn.state = PawnState::Idle;
                continue;
            };
            pawn.state = choice.state;
            pawn.target = Some(choice.target);
            pawn.steer_towards(centre);
            pawn.advance(self.extent);
            pursuing += 1;
        }
        pursuing
    }

    /// Updates the extent used by subsequent wraparound checks.
    ///
    /// Pawns are not repositioned.
    ///
    /// # Errors
    /// Returns [`ArenaError::InvalidDimensions`] and keeps the previous extent
    /// when either dimension is not finite and strictly positive.
    pub fn notify_resize(&mut self, width: f32, height: f32) -> Result<(), ArenaError> {
        if let Err(err) = validate_extent(width, height) {
            warn!("Ignoring arena resize: {err}");
            return Err(err);
        }
        debug!("Arena resized to {width}x{height}");
        self.extent = Vec2::new(width, height);
        Ok(())
    }

    /// All pawns in storage order.
    #[must_use]
    pub fn pawns(&self) -> &[Pawn] {
        &self.pawns
    }

    /// The pawn stored at `id`.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id.index())
    }

    /// Renderer view of every pawn.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PawnSnapshot> {
        self.pawns
            .iter()
            .enumerate()
            .map(|(slot, pawn)| PawnSnapshot::capture(PawnId(slot), pawn))
            .collect()
    }

    /// Pawns per kind.
    #[must_use]
    pub fn census(&self) -> Census {
        census(&self.pawns)
    }

    /// Current arena width and height.
    #[must_use]
    pub const fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Ticks advanced so far, including the finishing tick.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether a tick has already reported [`TickOutcome::Finished`].
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}
