//! Army attributes and per-battle combat state.
//!
//! [`ArmyAttributes`] is the squaddie's permanent sheet (hit point maximum,
//! defenses, proficiencies, tier). [`InBattleAttributes`] wraps it with the
//! state that changes during a battle: current hit points and timed modifiers.
//!
//! Invariant: `0 <= current_hit_points <= max_hit_points`. The field is
//! private and every mutation goes through a clamping method.

use std::collections::BTreeMap;

use crate::combat::apply_damage;

use super::modifiers::{AttributeModifier, AttributeModifierSet, AttributeType};
use super::proficiency::ProficiencyLevel;

/// Defensive category an attack is checked against.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResistanceType {
    #[default]
    Armor,
    Body,
    Mind,
    Soul,
}

impl ResistanceType {
    /// Modifier type whose active total adds to this resistance.
    pub const fn attribute_type(self) -> AttributeType {
        match self {
            Self::Armor => AttributeType::Armor,
            Self::Body => AttributeType::Body,
            Self::Mind => AttributeType::Mind,
            Self::Soul => AttributeType::Soul,
        }
    }
}

/// Trained defense against one resistance type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseRating {
    #[cfg_attr(feature = "serde", serde(default))]
    pub proficiency: ProficiencyLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: i32,
}

impl DefenseRating {
    pub const fn new(proficiency: ProficiencyLevel, base: i32) -> Self {
        Self { proficiency, base }
    }

    /// `base + proficiency bonus at tier`.
    pub const fn value(&self, tier: u8) -> i32 {
        self.base + self.proficiency.bonus(tier)
    }
}

/// Permanent combat sheet of a squaddie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmyAttributes {
    pub max_hit_points: u32,
    pub tier: u8,
    /// Defense per resistance type. Missing entries are untrained with base 0.
    pub defenses: BTreeMap<ResistanceType, DefenseRating>,
    /// Attack proficiency per resistance type. Missing entries are untrained.
    pub versus_proficiency: BTreeMap<ResistanceType, ProficiencyLevel>,
}

impl ArmyAttributes {
    pub fn new(max_hit_points: u32) -> Self {
        Self {
            max_hit_points,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_armor(self, proficiency: ProficiencyLevel, base: i32) -> Self {
        self.with_defense(ResistanceType::Armor, proficiency, base)
    }

    #[must_use]
    pub fn with_defense(
        mut self,
        resistance: ResistanceType,
        proficiency: ProficiencyLevel,
        base: i32,
    ) -> Self {
        self.defenses
            .insert(resistance, DefenseRating::new(proficiency, base));
        self
    }

    #[must_use]
    pub fn with_versus_proficiency(
        mut self,
        resistance: ResistanceType,
        proficiency: ProficiencyLevel,
    ) -> Self {
        self.versus_proficiency.insert(resistance, proficiency);
        self
    }

    pub fn defense(&self, resistance: ResistanceType) -> DefenseRating {
        self.defenses.get(&resistance).copied().unwrap_or_default()
    }

    pub fn proficiency_versus(&self, resistance: ResistanceType) -> ProficiencyLevel {
        self.versus_proficiency
            .get(&resistance)
            .copied()
            .unwrap_or_default()
    }
}

/// Outcome of [`InBattleAttributes::take_damage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageTaken {
    /// Soaked by absorb modifiers.
    pub absorbed: u32,
    /// Hit points actually lost.
    pub hit_points_lost: u32,
}

/// Mutable combat state of one squaddie for the current battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InBattleAttributes {
    army: ArmyAttributes,
    current_hit_points: u32,
    modifiers: AttributeModifierSet,
}

impl InBattleAttributes {
    /// Start a battle at full health with no modifiers.
    pub fn new(army: ArmyAttributes) -> Self {
        let current_hit_points = army.max_hit_points;
        Self {
            army,
            current_hit_points,
            modifiers: AttributeModifierSet::new(),
        }
    }

    /// Set current hit points, clamped to the maximum (builder pattern).
    #[must_use]
    pub fn with_current_hit_points(mut self, hit_points: u32) -> Self {
        self.current_hit_points = hit_points.min(self.army.max_hit_points);
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: AttributeModifier) -> Self {
        self.modifiers.add(modifier);
        self
    }

    pub fn army(&self) -> &ArmyAttributes {
        &self.army
    }

    pub fn modifiers(&self) -> &AttributeModifierSet {
        &self.modifiers
    }

    pub fn current_hit_points(&self) -> u32 {
        self.current_hit_points
    }

    pub fn max_hit_points(&self) -> u32 {
        self.army.max_hit_points
    }

    pub fn missing_hit_points(&self) -> u32 {
        self.army.max_hit_points - self.current_hit_points
    }

    pub fn is_knocked_out(&self) -> bool {
        self.current_hit_points == 0
    }

    /// Run incoming damage through absorb modifiers, then hit points (clamped at 0).
    pub fn take_damage(&mut self, damage: u32) -> DamageTaken {
        let absorbed = self.modifiers.absorb_damage(damage);
        let before = self.current_hit_points;
        self.current_hit_points = apply_damage(before, damage - absorbed);
        DamageTaken {
            absorbed,
            hit_points_lost: before - self.current_hit_points,
        }
    }

    /// Restore hit points up to the maximum. Returns the amount actually restored.
    pub fn receive_healing(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.missing_hit_points());
        self.current_hit_points += healed;
        healed
    }

    /// Grant a modifier. Returns false when it had already expired.
    pub fn add_modifier(&mut self, modifier: AttributeModifier) -> bool {
        self.modifiers.add(modifier)
    }

    /// Turn-boundary hook: tick durations down and drop what expired.
    pub fn end_turn(&mut self) {
        self.modifiers.decrement_durations();
        self.modifiers.prune_expired();
    }
}
