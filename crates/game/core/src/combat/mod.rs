//! Action resolution.
//!
//! Pure functions that turn an actor, an action and its resolved targets
//! into degrees of success and state changes. The only mutation happens in
//! [`apply_effect`], reached from [`ActionCalculator::calculate_and_apply_results`].
//!
//! # Core Functions
//!
//! - `build_roll_context`: attacker bonus and defense threshold, with named contributions
//! - `classify`: dice + context -> degree of success
//! - `forecast`: classify over the whole sample space
//! - `apply_effect` / `simulate_effect`: consequences of a degree on one target
//! - `record_change`: team statistics for a committed change

pub mod calculator;
pub mod damage;
pub mod degree;
pub mod effect;
pub mod error;
pub mod forecast;
pub mod modifiers;
pub mod penalty;
pub mod result;
pub mod roll;
pub mod statistics;

pub use calculator::{ActionCalculator, ActionRequest};
pub use damage::{DamageExplanation, DamageType, apply_damage, scaled_damage};
pub use degree::DegreeOfSuccess;
pub use effect::{apply_effect, simulate_effect};
pub use error::CombatError;
pub use forecast::{DegreeDistribution, forecast};
pub use modifiers::{attacker_bonus, build_roll_context, defense_threshold};
pub use penalty::multiple_attack_penalty;
pub use result::{CalculatedResult, EffectResult, SquaddieChange, TargetResult};
pub use roll::{
    DiceOutcome, RollContext, RollModifier, RollModifierKind, RollVerdict, classify, classify_roll,
    resolve_roll, roll_dice,
};
pub use statistics::record_change;
