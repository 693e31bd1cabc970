//! Damage scaling and application.

use super::degree::DegreeOfSuccess;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type carried by an effect's damage map.
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
pub enum DamageType {
    /// Physical harm (blades, arrows, fists).
    Body,
    /// Spiritual harm (curses, drain).
    Soul,
    /// Untyped damage.
    Unknown,
}

// ============================================================================
// Damage Explanation
// ============================================================================

/// What a damaging effect did (or would do) to one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageExplanation {
    /// Damage after degree scaling, before absorption.
    pub raw: u32,
    /// Soaked by absorb modifiers.
    pub absorbed: u32,
    /// Hit points actually lost.
    pub net: u32,
    /// Post-absorption damage reached the target's hit points before the effect.
    pub will_ko: bool,
}

impl DamageExplanation {
    pub const NONE: Self = Self {
        raw: 0,
        absorbed: 0,
        net: 0,
        will_ko: false,
    };
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Scale an effect's base damage by the degree it landed with.
///
/// # Formula
///
/// ```text
/// CriticalSuccess:          base × 2
/// Success:                  base
/// Failure, CriticalFailure: 0
/// None:                     0 for attacks, base otherwise
/// ```
///
/// Saturates at `u32::MAX`.
pub fn scaled_damage(base: u32, degree: DegreeOfSuccess, is_attack: bool) -> u32 {
    match degree {
        DegreeOfSuccess::None if !is_attack => base,
        _ => base.saturating_mul(degree.damage_multiplier()),
    }
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_success_doubles_damage() {
        assert_eq!(scaled_damage(2, DegreeOfSuccess::CriticalSuccess, true), 4);
        assert_eq!(scaled_damage(2, DegreeOfSuccess::Success, true), 2);
    }

    #[test]
    fn failures_deal_nothing() {
        assert_eq!(scaled_damage(5, DegreeOfSuccess::Failure, true), 0);
        assert_eq!(scaled_damage(5, DegreeOfSuccess::CriticalFailure, true), 0);
    }

    #[test]
    fn uncontested_effects_deal_base_damage() {
        assert_eq!(scaled_damage(3, DegreeOfSuccess::None, false), 3);
        assert_eq!(scaled_damage(3, DegreeOfSuccess::None, true), 0);
    }

    #[test]
    fn critical_damage_saturates() {
        let huge = u32::MAX / 2 + 1;
        assert_eq!(scaled_damage(huge, DegreeOfSuccess::CriticalSuccess, true), u32::MAX);
        assert_eq!(scaled_damage(huge, DegreeOfSuccess::Success, true), huge);
    }

    #[test]
    fn apply_damage_clamps_at_zero() {
        assert_eq!(apply_damage(3, 5), 0);
        assert_eq!(apply_damage(5, 2), 3);
    }
}
