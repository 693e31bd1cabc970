//! Per-turn action history.
//!
//! The multiple attack penalty is derived from this log on every query
//! instead of living as a counter on the squaddie, so forecasting "what if I
//! attack again" never has to mutate anything.

use crate::action::ActionTemplate;
use crate::state::SquaddieId;

/// Read-only view of what has already happened this turn.
pub trait ActionHistory {
    /// How many attack actions `actor` has already committed this turn.
    fn count_prior_attacks_this_turn(&self, actor: SquaddieId) -> u32;
}

/// One committed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub turn: u32,
    pub actor: SquaddieId,
    pub action_id: String,
    pub is_attack: bool,
    pub action_points: u32,
}

/// Append-only log of committed actions, scoped by turn number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnActionLog {
    turn: u32,
    records: Vec<ActionRecord>,
}

impl TurnActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Advance to the next turn. Earlier records stay in the log but no
    /// longer count toward this turn's queries.
    pub fn start_turn(&mut self) {
        self.turn += 1;
    }

    /// Append a committed action for the current turn.
    pub fn record(&mut self, actor: SquaddieId, action: &ActionTemplate) {
        self.records.push(ActionRecord {
            turn: self.turn,
            actor,
            action_id: action.id.clone(),
            is_attack: action.is_attack(),
            action_points: action.action_points,
        });
    }

    /// Records of the current turn, oldest first.
    pub fn this_turn(&self) -> impl Iterator<Item = &ActionRecord> {
        let turn = self.turn;
        self.records.iter().filter(move |record| record.turn == turn)
    }

    /// Action points `actor` has spent this turn.
    pub fn action_points_spent(&self, actor: SquaddieId) -> u32 {
        self.this_turn()
            .filter(|record| record.actor == actor)
            .map(|record| record.action_points)
            .sum()
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }
}

impl ActionHistory for TurnActionLog {
    fn count_prior_attacks_this_turn(&self, actor: SquaddieId) -> u32 {
        self.this_turn()
            .filter(|record| record.actor == actor && record.is_attack)
            .count() as u32
    }
}
