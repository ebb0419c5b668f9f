//! Dice notation (`NdM`) parsing and rolling.

use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

pub const MIN_DICE: u32 = 1;
pub const MAX_DICE: u32 = 100;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("Invalid dice notation. Use format: NdM (e.g., 2d6)")]
    InvalidNotation,
    #[error("Number of dice must be between 1 and 100")]
    CountOutOfRange,
    #[error("Number of sides must be between 2 and 100")]
    SidesOutOfRange,
}

fn notation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)d(\d+)$").expect("dice pattern is valid"))
}

/// A validated `NdM` expression: `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceNotation {
    pub count: u32,
    pub sides: u32,
}

impl FromStr for DiceNotation {
    type Err = DiceError;

    /// Checks run in order: shape, then dice count, then side count.
    /// Digit runs too large for `u32` are out of range, not malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = notation_pattern().captures(s).ok_or(DiceError::InvalidNotation)?;
        let count: u32 = caps[1].parse().map_err(|_| DiceError::CountOutOfRange)?;
        if !(MIN_DICE..=MAX_DICE).contains(&count) {
            return Err(DiceError::CountOutOfRange);
        }
        let sides: u32 = caps[2].parse().map_err(|_| DiceError::SidesOutOfRange)?;
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(DiceError::SidesOutOfRange);
        }
        Ok(DiceNotation { count, sides })
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl DiceNotation {
    /// Roll every die independently and uniformly over `1..=sides`, keeping draw order.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceRoll {
        let rolls: Vec<u32> = (0..self.count).map(|_| rng.gen_range(1..=self.sides)).collect();
        let total = rolls.iter().sum();
        DiceRoll { rolls, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRoll {
    pub rolls: Vec<u32>,
    pub total: u32,
}
