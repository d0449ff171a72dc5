//! Pawn kinds and the rock/paper/scissors effectiveness cycle.
//!
//! Rock blunts Scissors, Scissors cut Paper and Paper wraps Rock. The
//! relation is cyclic and irreflexive: no kind beats itself.

use std::fmt;

use log::error;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The three pawn kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PawnType {
    /// Beats [`PawnType::Scissors`], loses to [`PawnType::Paper`].
    Rock,
    /// Beats [`PawnType::Rock`], loses to [`PawnType::Scissors`].
    Paper,
    /// Beats [`PawnType::Paper`], loses to [`PawnType::Rock`].
    Scissors,
}

impl PawnType {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Returns the kind this one defeats.
    #[must_use]
    pub const fn prey(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Returns the kind that survives a contact between `left` and `right`.
    ///
    /// Equal kinds trivially survive as themselves.
    ///
    /// # Examples
    /// ```
    /// use rochambeau::PawnType;
    /// assert_eq!(PawnType::winner(PawnType::Rock, PawnType::Paper), PawnType::Paper);
    /// assert_eq!(PawnType::winner(PawnType::Rock, PawnType::Scissors), PawnType::Rock);
    /// ```
    #[must_use]
    pub const fn winner(left: Self, right: Self) -> Self {
        if beats(left, right) {
            right
        } else {
            left
        }
    }
}

impl fmt::Display for PawnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// Returns `true` when `attacker` defeats `defender`.
///
/// # Examples
/// ```
/// use rochambeau::{beats, PawnType};
/// assert!(beats(PawnType::Scissors, PawnType::Rock));
/// assert!(!beats(PawnType::Rock, PawnType::Scissors));
/// assert!(!beats(PawnType::Paper, PawnType::Paper));
/// ```
#[must_use]
pub const fn beats(defender: PawnType, attacker: PawnType) -> bool {
    matches!(
        (defender, attacker),
        (PawnType::Scissors, PawnType::Rock)
            | (PawnType::Paper, PawnType::Scissors)
            | (PawnType::Rock, PawnType::Paper)
    )
}

impl Distribution<PawnType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PawnType {
        match rng.gen_range(0..3_u8) {
            0 => PawnType::Rock,
            1 => PawnType::Paper,
            2 => PawnType::Scissors,
            draw => {
                // A draw outside the range is a logic defect, not a runtime condition.
                error!("pawn kind draw {draw} fell outside 0..3");
                debug_assert!(false, "pawn kind draw {draw} fell outside 0..3");
                PawnType::Rock
            }
        }
    }
}
