//! Roll classification.
//!
//! [`classify`] is the single source of truth for turning two dice and a
//! [`RollContext`] into a [`DegreeOfSuccess`]. The committed path feeds it
//! one real draw; the forecast enumerates every pair through it. Nothing
//! else in the crate decides a degree.
//!
//! # Precedence
//!
//! ```text
//! 1. no ATTACK trait          -> None (non-contested)
//! 2. ALWAYS_SUCCEEDS          -> Success
//! 3. difficulty override      -> returned verbatim
//! 4. margin = dice + bonus - threshold
//! 5. margin <= -critical_margin or double minimum
//!                             -> CriticalFailure (Failure if suppressed)
//! 6. margin >= critical_margin or (double maximum and margin >= 0)
//!                             -> CriticalSuccess (Success if suppressed)
//! 7. margin >= 0              -> Success, else Failure
//! ```
//!
//! The two critical triggers in steps 5 and 6 are independently OR'd. When
//! both a failure and a success trigger fire (only possible on a degenerate
//! one-faced die), the critical failure wins.

use arrayvec::ArrayVec;

use crate::action::{EffectTraits, requires_roll};
use crate::config::CombatConfig;
use crate::env::{DifficultySetting, NumberGenerator};
use crate::state::Affiliation;

use super::degree::DegreeOfSuccess;
use super::error::CombatError;

// ============================================================================
// Dice
// ============================================================================

/// The dice drawn for one (effect, target) resolution.
///
/// Empty when the effect was resolved without a roll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceOutcome {
    rolls: ArrayVec<u32, { CombatConfig::DICE_PER_ROLL }>,
}

impl DiceOutcome {
    /// No dice were consulted.
    pub fn not_rolled() -> Self {
        Self::default()
    }

    pub fn rolled(first: u32, second: u32) -> Self {
        Self {
            rolls: ArrayVec::from([first, second]),
        }
    }

    /// False for the no-roll short-circuit.
    pub fn occurred(&self) -> bool {
        !self.rolls.is_empty()
    }

    /// Die values in draw order.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    pub fn total(&self) -> u32 {
        self.rolls.iter().sum()
    }
}

// ============================================================================
// Roll Context
// ============================================================================

/// Named source of a roll contribution.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RollModifierKind {
    /// Attacker's proficiency against the checked resistance.
    VersusProficiency,
    /// Difficulty setting bonus for the attacker's side.
    Circumstance,
    /// Penalty for attacks already made this turn.
    MultipleAttackPenalty,
    /// Flat starting point of every defense.
    DefenseBaseline,
    /// Target's trained defense (base plus proficiency and tier).
    DefenseRating,
    /// Target's live attribute modifiers for the checked resistance.
    AttributeModifier,
}

/// One named contribution to a roll, kept for explanation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollModifier {
    pub kind: RollModifierKind,
    pub amount: i32,
}

impl RollModifier {
    pub const fn new(kind: RollModifierKind, amount: i32) -> Self {
        Self { kind, amount }
    }
}

/// Everything a roll is checked with, for one (effect, target) pair.
///
/// The committed and forecast paths build this through the same function,
/// so the numbers a player sees in a forecast are the numbers rolled against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollContext {
    pub attacker_bonus: i32,
    pub defense_threshold: i32,
    /// Non-zero contributions to `attacker_bonus`.
    pub attacker_modifiers: Vec<RollModifier>,
    /// Non-zero contributions to `defense_threshold`.
    pub defender_modifiers: Vec<RollModifier>,
    pub actor_affiliation: Affiliation,
    pub target_affiliation: Affiliation,
}

impl RollContext {
    /// `dice_total + attacker_bonus - defense_threshold`
    pub fn margin(&self, dice_total: u32) -> i32 {
        dice_total as i32 + self.attacker_bonus - self.defense_threshold
    }
}

// ============================================================================
// Classification
// ============================================================================

/// A classified roll, and whether the difficulty setting decided it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollVerdict {
    pub degree: DegreeOfSuccess,
    /// True when the difficulty override replaced the dice.
    pub preempted: bool,
}

impl RollVerdict {
    const fn rolled(degree: DegreeOfSuccess) -> Self {
        Self {
            degree,
            preempted: false,
        }
    }
}

/// Classify one roll.
///
/// # Errors
///
/// - [`CombatError::DiceNotRolled`] for a contested roll without two dice
/// - [`CombatError::DieOutOfRange`] for a die outside the configured range
pub fn classify(
    dice: &DiceOutcome,
    context: &RollContext,
    traits: EffectTraits,
    difficulty: &DifficultySetting,
    config: &CombatConfig,
) -> Result<DegreeOfSuccess, CombatError> {
    classify_roll(dice, context, traits, difficulty, config).map(|verdict| verdict.degree)
}

/// [`classify`], also reporting whether the difficulty override decided the
/// roll. The override is consulted at most once.
pub fn classify_roll(
    dice: &DiceOutcome,
    context: &RollContext,
    traits: EffectTraits,
    difficulty: &DifficultySetting,
    config: &CombatConfig,
) -> Result<RollVerdict, CombatError> {
    if !traits.contains(EffectTraits::ATTACK) {
        return Ok(RollVerdict::rolled(DegreeOfSuccess::None));
    }
    if traits.contains(EffectTraits::ALWAYS_SUCCEEDS) {
        return Ok(RollVerdict::rolled(DegreeOfSuccess::Success));
    }
    if let Some(degree) = difficulty.preempt(context) {
        return Ok(RollVerdict {
            degree,
            preempted: true,
        });
    }

    let &[first, second] = dice.rolls() else {
        return Err(CombatError::DiceNotRolled {
            expected: CombatConfig::DICE_PER_ROLL,
            actual: dice.rolls().len(),
        });
    };
    check_die(first, config)?;
    check_die(second, config)?;

    let margin = context.margin(first + second);

    let double_minimum = first == config.die_min && second == config.die_min;
    if margin <= -config.critical_margin || double_minimum {
        return Ok(RollVerdict::rolled(
            if traits.contains(EffectTraits::CANNOT_CRITICALLY_FAIL) {
                DegreeOfSuccess::Failure
            } else {
                DegreeOfSuccess::CriticalFailure
            },
        ));
    }

    let double_maximum = first == config.die_max && second == config.die_max;
    if margin >= config.critical_margin || (double_maximum && margin >= 0) {
        return Ok(RollVerdict::rolled(
            if traits.contains(EffectTraits::CANNOT_CRITICALLY_SUCCEED) {
                DegreeOfSuccess::Success
            } else {
                DegreeOfSuccess::CriticalSuccess
            },
        ));
    }

    Ok(RollVerdict::rolled(if margin >= 0 {
        DegreeOfSuccess::Success
    } else {
        DegreeOfSuccess::Failure
    }))
}

/// Draw the dice an effect needs: two for a contested roll, none otherwise.
///
/// Every value is range-checked as it is drawn.
pub fn roll_dice(
    traits: EffectTraits,
    generator: &mut (impl NumberGenerator + ?Sized),
    config: &CombatConfig,
) -> Result<DiceOutcome, CombatError> {
    if !requires_roll(traits) {
        return Ok(DiceOutcome::not_rolled());
    }

    let mut rolls = ArrayVec::new();
    for _ in 0..CombatConfig::DICE_PER_ROLL {
        let value = generator.next(config.die_min, config.die_max)?;
        check_die(value, config)?;
        rolls.push(value);
    }
    Ok(DiceOutcome { rolls })
}

/// Draw and classify in one step.
pub fn resolve_roll(
    traits: EffectTraits,
    context: &RollContext,
    difficulty: &DifficultySetting,
    generator: &mut (impl NumberGenerator + ?Sized),
    config: &CombatConfig,
) -> Result<(DiceOutcome, DegreeOfSuccess), CombatError> {
    let dice = roll_dice(traits, generator, config)?;
    let degree = classify(&dice, context, traits, difficulty, config)?;
    Ok((dice, degree))
}

fn check_die(value: u32, config: &CombatConfig) -> Result<(), CombatError> {
    if config.contains_die(value) {
        Ok(())
    } else {
        Err(CombatError::DieOutOfRange {
            value,
            min: config.die_min,
            max: config.die_max,
        })
    }
}
