//! Difficulty settings and roll overrides.
//!
//! A [`DifficultySetting`] contributes flat circumstance bonuses per side and
//! may carry a [`DifficultyOverride`] that preempts contested rolls entirely.
//! The override is a strategy consulted by the roll classifier before any
//! arithmetic, so the classifier never branches on difficulty itself.

use std::fmt;

use crate::combat::{DegreeOfSuccess, RollContext};
use crate::state::Affiliation;

/// Strategy that can force the degree of a contested roll.
pub trait DifficultyOverride {
    /// `Some(degree)` replaces the roll; `None` lets it resolve normally.
    fn preempt(&self, context: &RollContext) -> Option<DegreeOfSuccess>;
}

impl<F> DifficultyOverride for F
where
    F: Fn(&RollContext) -> Option<DegreeOfSuccess>,
{
    fn preempt(&self, context: &RollContext) -> Option<DegreeOfSuccess> {
        self(context)
    }
}

/// Built-in accessibility overrides.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ChallengeModifier {
    /// Player attacks against hostile targets always hit; enemy attacks
    /// against the player team always miss.
    TrainingWheels,
}

impl DifficultyOverride for ChallengeModifier {
    fn preempt(&self, context: &RollContext) -> Option<DegreeOfSuccess> {
        match self {
            Self::TrainingWheels => {
                let actor = context.actor_affiliation;
                let target = context.target_affiliation;
                if actor.is_player_team() && !target.is_friendly_to(Affiliation::Player) {
                    Some(DegreeOfSuccess::Success)
                } else if actor == Affiliation::Enemy && target.is_player_team() {
                    Some(DegreeOfSuccess::Failure)
                } else {
                    None
                }
            }
        }
    }
}

/// Difficulty knobs applied to every contested roll.
#[derive(Default)]
pub struct DifficultySetting {
    /// Added to attack rolls made by player squaddies.
    pub player_team_roll_bonus: i32,
    /// Added to attack rolls made by enemy squaddies.
    pub enemy_roll_bonus: i32,
    roll_override: Option<Box<dyn DifficultyOverride>>,
}

impl DifficultySetting {
    /// No bonuses, no override.
    pub fn normal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_roll_bonuses(mut self, player_team: i32, enemy: i32) -> Self {
        self.player_team_roll_bonus = player_team;
        self.enemy_roll_bonus = enemy;
        self
    }

    #[must_use]
    pub fn with_override(mut self, roll_override: impl DifficultyOverride + 'static) -> Self {
        self.roll_override = Some(Box::new(roll_override));
        self
    }

    #[must_use]
    pub fn with_challenge(self, challenge: ChallengeModifier) -> Self {
        self.with_override(challenge)
    }

    pub fn has_override(&self) -> bool {
        self.roll_override.is_some()
    }

    /// Flat bonus for attack rolls made by a squaddie of this affiliation.
    pub fn circumstance_bonus(&self, affiliation: Affiliation) -> i32 {
        match affiliation {
            Affiliation::Player => self.player_team_roll_bonus,
            Affiliation::Enemy => self.enemy_roll_bonus,
            Affiliation::Ally | Affiliation::None => 0,
        }
    }

    /// Ask the override (if any) for a forced degree.
    pub fn preempt(&self, context: &RollContext) -> Option<DegreeOfSuccess> {
        self.roll_override
            .as_ref()
            .and_then(|roll_override| roll_override.preempt(context))
    }
}

impl fmt::Debug for DifficultySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DifficultySetting")
            .field("player_team_roll_bonus", &self.player_team_roll_bonus)
            .field("enemy_roll_bonus", &self.enemy_roll_bonus)
            .field("has_override", &self.has_override())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(actor: Affiliation, target: Affiliation) -> RollContext {
        RollContext {
            actor_affiliation: actor,
            target_affiliation: target,
            ..RollContext::default()
        }
    }

    #[test]
    fn normal_difficulty_never_preempts() {
        let setting = DifficultySetting::normal();
        assert!(!setting.has_override());
        assert_eq!(
            setting.preempt(&context(Affiliation::Player, Affiliation::Enemy)),
            None
        );
        assert_eq!(setting.circumstance_bonus(Affiliation::Player), 0);
    }

    #[test]
    fn roll_bonuses_apply_per_side() {
        let setting = DifficultySetting::normal().with_roll_bonuses(2, -1);
        assert_eq!(setting.circumstance_bonus(Affiliation::Player), 2);
        assert_eq!(setting.circumstance_bonus(Affiliation::Enemy), -1);
        assert_eq!(setting.circumstance_bonus(Affiliation::Ally), 0);
    }

    #[test]
    fn training_wheels_favors_the_player() {
        let setting = DifficultySetting::normal().with_challenge(ChallengeModifier::TrainingWheels);
        assert_eq!(
            setting.preempt(&context(Affiliation::Player, Affiliation::Enemy)),
            Some(DegreeOfSuccess::Success)
        );
        assert_eq!(
            setting.preempt(&context(Affiliation::Enemy, Affiliation::Player)),
            Some(DegreeOfSuccess::Failure)
        );
        assert_eq!(
            setting.preempt(&context(Affiliation::Player, Affiliation::Ally)),
            None
        );
        assert_eq!(
            setting.preempt(&context(Affiliation::Enemy, Affiliation::Ally)),
            None
        );
    }

    #[test]
    fn closures_are_overrides() {
        let setting = DifficultySetting::normal()
            .with_override(|_: &RollContext| Some(DegreeOfSuccess::CriticalSuccess));
        assert_eq!(
            setting.preempt(&RollContext::default()),
            Some(DegreeOfSuccess::CriticalSuccess)
        );
    }
}
