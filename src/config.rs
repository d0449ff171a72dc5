//! Arena configuration.
//!
//! The rule set is fixed, so configuration only covers the arena extent, the
//! population and an optional seed for reproducible placement.

use serde::{Deserialize, Serialize};

use crate::error::{validate_extent, ArenaError};
use crate::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_PAWN_SIZE, DEFAULT_POPULATION};

/// Parameters used to seed a new [`crate::Arena`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Arena width in world units.
    pub width: f32,
    /// Arena height in world units.
    pub height: f32,
    /// Number of pawns placed at startup.
    pub population: usize,
    /// Edge length of every pawn's box.
    pub pawn_size: f32,
    /// Seed for placement and kinds; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            population: DEFAULT_POPULATION,
            pawn_size: DEFAULT_PAWN_SIZE,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Checks the extent and pawn size.
    ///
    /// # Errors
    /// Returns [`ArenaError`] when the extent or the pawn size is not finite
    /// and strictly positive.
    ///
    /// # Examples
    /// ```
    /// use rochambeau::SimulationConfig;
    /// let config = SimulationConfig { width: -1.0, ..SimulationConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ArenaError> {
        validate_extent(self.width, self.height)?;
        if !(self.pawn_size.is_finite() && self.pawn_size > 0.0) {
            return Err(ArenaError::InvalidPawnSize(self.pawn_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.population, DEFAULT_POPULATION);
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f32::NAN)]
    fn unusable_pawn_size_is_rejected(#[case] pawn_size: f32) {
        let config = SimulationConfig {
            pawn_size,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidPawnSize(_))
        ));
    }

    #[rstest]
    fn partial_json_falls_back_to_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"width": 320.0, "seed": 9}"#).expect("valid config json");
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, DEFAULT_ARENA_HEIGHT);
        assert_eq!(config.seed, Some(9));
    }
}
