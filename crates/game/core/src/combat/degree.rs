//! Degrees of success and their damage scaling.

/// Classification of how an effect landed.
///
/// `None` marks a non-contested effect where no roll concept applies
/// (unconditional buffs, heals).
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
pub enum DegreeOfSuccess {
    CriticalSuccess,
    Success,
    Failure,
    CriticalFailure,
    None,
}

impl DegreeOfSuccess {
    /// Every degree, in the order forecasts report them.
    pub const ALL: [DegreeOfSuccess; 5] = [
        Self::CriticalSuccess,
        Self::Success,
        Self::Failure,
        Self::CriticalFailure,
        Self::None,
    ];

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        match self {
            Self::CriticalSuccess => 0,
            Self::Success => 1,
            Self::Failure => 2,
            Self::CriticalFailure => 3,
            Self::None => 4,
        }
    }

    /// True for the degrees whose consequences land on the target.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::Success)
    }

    pub const fn is_critical(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::CriticalFailure)
    }

    /// Damage multiplier applied to a damaging effect.
    pub const fn damage_multiplier(self) -> u32 {
        match self {
            Self::CriticalSuccess => 2,
            Self::Success => 1,
            Self::Failure | Self::CriticalFailure | Self::None => 0,
        }
    }
}
