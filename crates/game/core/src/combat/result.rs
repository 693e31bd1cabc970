//! Calculation results.
//!
//! Results are pure output: built fresh per call, owned by the caller and
//! never mutated afterwards.

use crate::state::SquaddieId;
use crate::stats::InBattleAttributes;

use super::damage::DamageExplanation;
use super::degree::DegreeOfSuccess;
use super::roll::{DiceOutcome, RollContext};

/// What one effect did (or would do) to one target under one degree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieChange {
    pub target: SquaddieId,
    pub degree: DegreeOfSuccess,
    pub damage: DamageExplanation,
    pub healing_received: u32,
    /// State immediately before this effect.
    pub attributes_before: InBattleAttributes,
    /// State immediately after this effect.
    pub attributes_after: InBattleAttributes,
    /// Dice pairs (out of the full sample space) producing this degree.
    /// Forecasts only.
    pub chance_of_degree_of_success: Option<u32>,
}

impl SquaddieChange {
    #[must_use]
    pub fn with_chance(mut self, count: u32) -> Self {
        self.chance_of_degree_of_success = Some(count);
        self
    }
}

/// One target's share of an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetResult {
    pub target: SquaddieId,
    pub context: RollContext,
    /// Dice actually drawn. Never rolled in forecasts.
    pub dice: DiceOutcome,
    /// One change when committed; one per possible degree when forecast.
    pub changes: Vec<SquaddieChange>,
}

impl TargetResult {
    /// The committed change (or the first forecast candidate).
    pub fn change(&self) -> Option<&SquaddieChange> {
        self.changes.first()
    }
}

/// One effect of the action, across all its targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    /// Position of the effect in the action template.
    pub effect_index: usize,
    pub targets: Vec<TargetResult>,
}

impl EffectResult {
    pub fn target(&self, id: SquaddieId) -> Option<&TargetResult> {
        self.targets.iter().find(|result| result.target == id)
    }
}

/// Everything one action invocation produced, in effect order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatedResult {
    pub actor: SquaddieId,
    pub action_id: String,
    pub effects: Vec<EffectResult>,
}

impl CalculatedResult {
    /// Every change, flattened in effect then target order.
    pub fn changes(&self) -> impl Iterator<Item = &SquaddieChange> {
        self.effects
            .iter()
            .flat_map(|effect| effect.targets.iter())
            .flat_map(|target| target.changes.iter())
    }
}
