//! Squaddie lookup for the combat layer.

use std::collections::BTreeMap;

use crate::combat::CombatError;

use super::types::{BattleSquaddie, SquaddieId};

/// Read/write access to squaddies by id.
///
/// The action calculator only ever borrows the repository for the duration
/// of one resolution; forecasting takes it by shared reference and therefore
/// cannot write.
pub trait SquaddieRepository {
    fn squaddie(&self, id: SquaddieId) -> Option<&BattleSquaddie>;

    fn squaddie_mut(&mut self, id: SquaddieId) -> Option<&mut BattleSquaddie>;

    /// Like [`squaddie`](Self::squaddie), but an unknown id is an error.
    fn require(&self, id: SquaddieId) -> Result<&BattleSquaddie, CombatError> {
        self.squaddie(id).ok_or(CombatError::SquaddieNotFound(id))
    }

    fn require_mut(&mut self, id: SquaddieId) -> Result<&mut BattleSquaddie, CombatError> {
        self.squaddie_mut(id).ok_or(CombatError::SquaddieNotFound(id))
    }
}

/// In-memory roster of every squaddie in a battle, ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaddieRoster {
    squaddies: BTreeMap<SquaddieId, BattleSquaddie>,
}

impl SquaddieRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a squaddie. Returns the one it replaced, if any.
    pub fn insert(&mut self, squaddie: BattleSquaddie) -> Option<BattleSquaddie> {
        self.squaddies.insert(squaddie.id, squaddie)
    }

    pub fn remove(&mut self, id: SquaddieId) -> Option<BattleSquaddie> {
        self.squaddies.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleSquaddie> {
        self.squaddies.values()
    }

    pub fn len(&self) -> usize {
        self.squaddies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squaddies.is_empty()
    }

    /// Turn-boundary hook: decay modifier durations on every squaddie.
    pub fn end_turn(&mut self) {
        for squaddie in self.squaddies.values_mut() {
            squaddie.attributes.end_turn();
        }
    }
}

impl SquaddieRepository for SquaddieRoster {
    fn squaddie(&self, id: SquaddieId) -> Option<&BattleSquaddie> {
        self.squaddies.get(&id)
    }

    fn squaddie_mut(&mut self, id: SquaddieId) -> Option<&mut BattleSquaddie> {
        self.squaddies.get_mut(&id)
    }
}

impl FromIterator<BattleSquaddie> for SquaddieRoster {
    fn from_iter<I: IntoIterator<Item = BattleSquaddie>>(iter: I) -> Self {
        let mut roster = Self::new();
        for squaddie in iter {
            roster.insert(squaddie);
        }
        roster
    }
}
