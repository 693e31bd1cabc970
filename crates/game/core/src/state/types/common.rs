use std::fmt;

/// Unique identifier for a squaddie taking part in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquaddieId(pub u32);

impl SquaddieId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SquaddieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side a squaddie fights for.
///
/// Only [`Affiliation::Player`] squaddies count toward the player team's
/// mission statistics; allies are friendly but AI-controlled.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Affiliation {
    /// Controlled by the player.
    Player,
    /// Friendly to the player, AI controlled.
    Ally,
    /// Hostile to the player.
    Enemy,
    /// Belongs to nobody (wildlife, hazards).
    #[default]
    None,
}

impl Affiliation {
    /// Returns true for squaddies on the player-controlled team.
    pub const fn is_player_team(self) -> bool {
        matches!(self, Self::Player)
    }

    /// Check if two affiliations fight on the same side.
    pub fn is_friendly_to(self, other: Affiliation) -> bool {
        match (self, other) {
            (Self::Player | Self::Ally, Self::Player | Self::Ally) => true,
            (Self::Enemy, Self::Enemy) => true,
            _ => false,
        }
    }
}
