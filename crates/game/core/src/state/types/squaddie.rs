use crate::stats::{ArmyAttributes, InBattleAttributes};

use super::common::{Affiliation, SquaddieId};

/// A squaddie as the combat layer sees it: identity, side, and battle state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSquaddie {
    pub id: SquaddieId,
    pub name: String,
    pub affiliation: Affiliation,
    pub attributes: InBattleAttributes,
}

impl BattleSquaddie {
    /// Create a squaddie at full health.
    pub fn new(
        id: SquaddieId,
        name: impl Into<String>,
        affiliation: Affiliation,
        army: ArmyAttributes,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            affiliation,
            attributes: InBattleAttributes::new(army),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: InBattleAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}
