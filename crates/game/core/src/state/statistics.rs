/// Running mission totals, partitioned by the player-controlled team.
///
/// Owned by the mission-tracking collaborator; the action calculator only
/// increments it when an action is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionStatistics {
    /// Hit points player squaddies removed from non-player squaddies.
    pub damage_dealt_by_player_team: u32,
    /// Hit points player squaddies lost.
    pub damage_taken_by_player_team: u32,
    /// Damage soaked by absorb modifiers on player squaddies.
    pub damage_absorbed_by_player_team: u32,
    /// Hit points restored to player squaddies.
    pub healing_received_by_player_team: u32,
    pub critical_hits_dealt_by_player_team: u32,
    pub critical_hits_taken_by_player_team: u32,
    pub critical_misses_by_player_team: u32,
    pub critical_misses_by_enemies: u32,
}

impl MissionStatistics {
    pub fn new() -> Self {
        Self::default()
    }
}
