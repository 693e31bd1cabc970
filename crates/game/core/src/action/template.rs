//! Immutable action definitions loaded at content time.
//!
//! An [`ActionTemplate`] is an ordered list of [`ActionEffectTemplate`]s.
//! The calculator resolves effects one at a time, in list order, so a later
//! effect observes the consequences of an earlier one.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::combat::DamageType;
use crate::stats::{AttributeModifier, ResistanceType};

bitflags! {
    /// Rule traits attached to an effect.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct EffectTraits: u16 {
        /// Contested: rolls against the target's defense and counts toward the multiple attack penalty.
        const ATTACK                    = 1 << 0;
        /// Restores hit points.
        const HEALING                   = 1 << 1;
        /// Skips the roll entirely and succeeds.
        const ALWAYS_SUCCEEDS           = 1 << 2;
        /// Critical successes are demoted to plain successes.
        const CANNOT_CRITICALLY_SUCCEED = 1 << 3;
        /// Critical failures are promoted to plain failures.
        const CANNOT_CRITICALLY_FAIL    = 1 << 4;
    }
}

bitflags! {
    /// Who an effect may target. Read only by the targeting collaborator.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TargetRelation: u8 {
        const SELF = 1 << 0;
        const ALLY = 1 << 1;
        const FOE  = 1 << 2;
    }
}

/// Kind of healing an effect performs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HealingType {
    /// Restores lost hit points, never past the maximum.
    LostHitPoints,
}

/// One effect of an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionEffectTemplate {
    pub traits: EffectTraits,
    pub damage: BTreeMap<DamageType, u32>,
    pub healing: BTreeMap<HealingType, u32>,
    /// Granted to each target when the effect lands.
    pub attribute_modifiers: Vec<AttributeModifier>,
    /// Defense the attack roll is checked against.
    pub versus: ResistanceType,
    pub target_relation: TargetRelation,
}

impl ActionEffectTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contested attack against a foe's armor.
    pub fn attack() -> Self {
        Self::new()
            .with_traits(EffectTraits::ATTACK)
            .targeting(TargetRelation::FOE)
    }

    #[must_use]
    pub fn with_traits(mut self, traits: EffectTraits) -> Self {
        self.traits |= traits;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage_type: DamageType, amount: u32) -> Self {
        let total = self.damage.entry(damage_type).or_insert(0);
        *total = total.saturating_add(amount);
        self
    }

    #[must_use]
    pub fn with_healing(mut self, healing_type: HealingType, amount: u32) -> Self {
        let total = self.healing.entry(healing_type).or_insert(0);
        *total = total.saturating_add(amount);
        self.traits |= EffectTraits::HEALING;
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: AttributeModifier) -> Self {
        self.attribute_modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn versus(mut self, resistance: ResistanceType) -> Self {
        self.versus = resistance;
        self
    }

    #[must_use]
    pub fn targeting(mut self, relation: TargetRelation) -> Self {
        self.target_relation = relation;
        self
    }

    pub fn is_attack(&self) -> bool {
        self.traits.contains(EffectTraits::ATTACK)
    }

    /// Contested effects that draw dice: attacks that do not always succeed.
    pub fn requires_roll(&self) -> bool {
        requires_roll(self.traits)
    }

    /// Sum of every damage type, saturating at `u32::MAX`.
    pub fn total_damage(&self) -> u32 {
        self.damage.values().fold(0, |total, &amount| total.saturating_add(amount))
    }

    pub fn total_healing(&self) -> u32 {
        self.healing.values().fold(0, |total, &amount| total.saturating_add(amount))
    }
}

/// True when a roll is drawn for an effect with these traits.
pub fn requires_roll(traits: EffectTraits) -> bool {
    traits.contains(EffectTraits::ATTACK) && !traits.contains(EffectTraits::ALWAYS_SUCCEEDS)
}

/// Immutable definition of something a squaddie can do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "ActionTemplate::default_action_points"))]
    pub action_points: u32,
    pub effects: Vec<ActionEffectTemplate>,
}

impl ActionTemplate {
    pub const DEFAULT_ACTION_POINTS: u32 = 1;

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action_points: Self::DEFAULT_ACTION_POINTS,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_action_points(mut self, action_points: u32) -> Self {
        self.action_points = action_points;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: ActionEffectTemplate) -> Self {
        self.effects.push(effect);
        self
    }

    /// An action counts as an attack when any of its effects does.
    pub fn is_attack(&self) -> bool {
        self.effects.iter().any(ActionEffectTemplate::is_attack)
    }

    #[cfg(feature = "serde")]
    fn default_action_points() -> u32 {
        Self::DEFAULT_ACTION_POINTS
    }
}
