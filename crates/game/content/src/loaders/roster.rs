//! Roster loader.
//!
//! A roster file lists the squaddies taking part in a battle. Each entry
//! carries the permanent army sheet plus optional battle state (current hit
//! points and active modifiers) so mid-battle snapshots can be authored.

use std::collections::BTreeSet;
use std::path::Path;

use tactics_core::{
    Affiliation, ArmyAttributes, AttributeModifier, BattleSquaddie, InBattleAttributes,
    SquaddieId, SquaddieRoster,
};

use crate::loaders::{LoadResult, read_file};

/// One roster entry as authored in RON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SquaddieSpec {
    pub id: u32,
    pub name: String,
    pub affiliation: Affiliation,
    #[serde(default)]
    pub army: ArmyAttributes,
    /// Starting hit points. Defaults to full health.
    #[serde(default)]
    pub current_hit_points: Option<u32>,
    #[serde(default)]
    pub modifiers: Vec<AttributeModifier>,
}

impl SquaddieSpec {
    /// Build the battle squaddie this entry describes.
    ///
    /// Hit points above the maximum are clamped and expired modifiers are
    /// dropped, matching what the attribute setters do at runtime.
    pub fn into_squaddie(self) -> BattleSquaddie {
        let mut attributes = InBattleAttributes::new(self.army.clone());
        if let Some(hit_points) = self.current_hit_points {
            attributes = attributes.with_current_hit_points(hit_points);
        }
        for modifier in self.modifiers {
            attributes.add_modifier(modifier);
        }

        BattleSquaddie::new(SquaddieId(self.id), self.name, self.affiliation, self.army)
            .with_attributes(attributes)
    }
}

/// Loader for squaddie rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<SquaddieSpec>`
    pub fn load(path: &Path) -> LoadResult<SquaddieRoster> {
        let content = read_file(path)?;
        Self::from_ron_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }

    pub fn from_ron_str(source: &str) -> LoadResult<SquaddieRoster> {
        let specs: Vec<SquaddieSpec> = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = BTreeSet::new();
        let mut roster = SquaddieRoster::new();
        for spec in specs {
            if !seen.insert(spec.id) {
                anyhow::bail!("Duplicate squaddie id {}", spec.id);
            }
            roster.insert(spec.into_squaddie());
        }

        tracing::debug!(
            target: "tactics::content",
            squaddies = roster.len(),
            "loaded roster"
        );
        Ok(roster)
    }
}
