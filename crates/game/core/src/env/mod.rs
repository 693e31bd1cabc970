//! Collaborators the combat layer consults but does not own.
//!
//! Randomness, the turn's action history and the difficulty setting all
//! come from outside the calculator and are passed in per call, so the same
//! resolution can be replayed deterministically in tests and run with real
//! randomness in play.
mod difficulty;
mod history;
mod rng;

pub use difficulty::{ChallengeModifier, DifficultyOverride, DifficultySetting};
pub use history::{ActionHistory, ActionRecord, TurnActionLog};
pub use rng::{
    NumberGenerator, RandomNumberGenerator, SeededNumberGenerator, StreamNumberGenerator,
};
