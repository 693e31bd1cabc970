//! Combat calculation errors.
//!
//! Every variant aborts the calculation in progress. None of them is a
//! gameplay outcome; they all point at a caller or content bug.

use crate::error::{ErrorSeverity, GameError};
use crate::state::SquaddieId;

/// Errors raised while resolving or forecasting an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Action template carries no effects.
    #[error("action `{0}` has no effects")]
    ActionHasNoEffects(String),

    /// Actor or target id is not in the repository.
    #[error("squaddie {0} not found")]
    SquaddieNotFound(SquaddieId),

    /// Resolved target lists do not line up with the action's effects.
    #[error("expected {expected} target lists, got {actual}")]
    TargetListMismatch { expected: usize, actual: usize },

    /// A generator produced a die value outside the configured range.
    #[error("die value {value} outside [{min}, {max}]")]
    DieOutOfRange { value: u32, min: u32, max: u32 },

    /// A contested roll was classified without its dice.
    #[error("expected {expected} dice, got {actual}")]
    DiceNotRolled { expected: usize, actual: usize },

    /// A scripted number stream ran out of values.
    #[error("number stream exhausted after {drawn} draws")]
    NumberStreamExhausted { drawn: usize },

    /// Configured die range cannot be rolled.
    #[error("invalid die range [{min}, {max}]")]
    InvalidDieRange { min: u32, max: u32 },

    /// A combat rule constant is outside the range the rules assume.
    #[error("invalid combat rule `{rule}` = {value}")]
    InvalidCombatRule { rule: String, value: i32 },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            ActionHasNoEffects(_) | SquaddieNotFound(_) | TargetListMismatch { .. } => {
                ErrorSeverity::Validation
            }
            NumberStreamExhausted { .. } | DiceNotRolled { .. } => ErrorSeverity::Internal,
            DieOutOfRange { .. } | InvalidDieRange { .. } | InvalidCombatRule { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            ActionHasNoEffects(_) => "COMBAT_ACTION_HAS_NO_EFFECTS",
            SquaddieNotFound(_) => "COMBAT_SQUADDIE_NOT_FOUND",
            TargetListMismatch { .. } => "COMBAT_TARGET_LIST_MISMATCH",
            DieOutOfRange { .. } => "COMBAT_DIE_OUT_OF_RANGE",
            DiceNotRolled { .. } => "COMBAT_DICE_NOT_ROLLED",
            NumberStreamExhausted { .. } => "COMBAT_NUMBER_STREAM_EXHAUSTED",
            InvalidDieRange { .. } => "COMBAT_INVALID_DIE_RANGE",
            InvalidCombatRule { .. } => "COMBAT_INVALID_COMBAT_RULE",
        }
    }
}
