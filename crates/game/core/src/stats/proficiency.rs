//! Proficiency levels and the tier scaling they unlock.

/// How well trained a squaddie is with an attack or defense.
///
/// Untrained squaddies get no bonus at all; every trained level adds its
/// rank plus the squaddie's tier.
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
pub enum ProficiencyLevel {
    #[default]
    Untrained,
    Novice,
    Expert,
    Master,
    Legendary,
}

impl ProficiencyLevel {
    /// Numeric rank of the level (Untrained = 0 .. Legendary = 4).
    pub const fn rank(self) -> i32 {
        match self {
            Self::Untrained => 0,
            Self::Novice => 1,
            Self::Expert => 2,
            Self::Master => 3,
            Self::Legendary => 4,
        }
    }

    /// Roll bonus granted at the given tier.
    ///
    /// # Formula
    ///
    /// ```text
    /// untrained: 0
    /// trained:   rank + tier
    /// ```
    pub const fn bonus(self, tier: u8) -> i32 {
        match self {
            Self::Untrained => 0,
            trained => trained.rank() + tier as i32,
        }
    }
}
