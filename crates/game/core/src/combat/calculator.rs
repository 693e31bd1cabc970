//! Action calculator: the two public entry points.
//!
//! [`ActionCalculator::calculate_and_apply_results`] commits an action:
//! draws dice, mutates targets, records statistics.
//! [`ActionCalculator::forecast_results`] enumerates what could happen and
//! takes the repository by shared reference, so it cannot mutate anything.
//!
//! Both walk effects in template order and targets in resolved order, and
//! both build their [`RollContext`](super::RollContext) through
//! [`build_roll_context`].

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::action::ActionTemplate;
use crate::config::CombatConfig;
use crate::env::{ActionHistory, DifficultySetting, NumberGenerator};
use crate::state::{BattleSquaddie, MissionStatistics, SquaddieId, SquaddieRepository};

use super::effect::{apply_effect, simulate_effect};
use super::error::CombatError;
use super::forecast::forecast;
use super::modifiers::build_roll_context;
use super::result::{CalculatedResult, EffectResult, TargetResult};
use super::roll::{DiceOutcome, classify_roll, roll_dice};
use super::statistics::record_change;

/// An action with its targets already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequest<'a> {
    pub actor: SquaddieId,
    pub action: &'a ActionTemplate,
    /// One target list per effect, in effect order.
    pub targets: Vec<Vec<SquaddieId>>,
}

impl<'a> ActionRequest<'a> {
    pub fn new(actor: SquaddieId, action: &'a ActionTemplate, targets: Vec<Vec<SquaddieId>>) -> Self {
        Self {
            actor,
            action,
            targets,
        }
    }

    /// Every effect hits the same targets.
    pub fn with_shared_targets(
        actor: SquaddieId,
        action: &'a ActionTemplate,
        targets: &[SquaddieId],
    ) -> Self {
        let targets = action.effects.iter().map(|_| targets.to_vec()).collect();
        Self::new(actor, action, targets)
    }

    /// Reject templates without effects and target lists that do not line up.
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.action.effects.is_empty() {
            return Err(CombatError::ActionHasNoEffects(self.action.id.clone()));
        }
        if self.targets.len() != self.action.effects.len() {
            return Err(CombatError::TargetListMismatch {
                expected: self.action.effects.len(),
                actual: self.targets.len(),
            });
        }
        Ok(())
    }

    fn target_ids(&self) -> impl Iterator<Item = SquaddieId> + '_ {
        self.targets.iter().flatten().copied()
    }
}

/// Resolves actions under one combat configuration and difficulty.
#[derive(Debug, Default)]
pub struct ActionCalculator {
    config: CombatConfig,
    difficulty: DifficultySetting,
}

impl ActionCalculator {
    pub fn new(config: CombatConfig, difficulty: DifficultySetting) -> Self {
        Self { config, difficulty }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn difficulty(&self) -> &DifficultySetting {
        &self.difficulty
    }

    /// Commit an action.
    ///
    /// All ids are checked and all dice are drawn and range-checked before
    /// the first target is touched, so a failing call leaves the repository
    /// and statistics unchanged.
    pub fn calculate_and_apply_results<R>(
        &self,
        request: &ActionRequest<'_>,
        roster: &mut R,
        history: &(impl ActionHistory + ?Sized),
        generator: &mut (impl NumberGenerator + ?Sized),
        statistics: &mut MissionStatistics,
    ) -> Result<CalculatedResult, CombatError>
    where
        R: SquaddieRepository + ?Sized,
    {
        self.check(request, &*roster)?;

        let mut draws = Vec::new();
        for (effect, targets) in request.action.effects.iter().zip(&request.targets) {
            for _ in targets {
                draws.push(roll_dice(effect.traits, generator, &self.config)?);
            }
        }
        let mut draws = draws.into_iter();

        let mut effects = Vec::with_capacity(request.action.effects.len());
        for (effect_index, (effect, targets)) in request
            .action
            .effects
            .iter()
            .zip(&request.targets)
            .enumerate()
        {
            let mut results = Vec::with_capacity(targets.len());
            for &target_id in targets {
                let context = {
                    let actor = roster.require(request.actor)?;
                    let target = roster.require(target_id)?;
                    build_roll_context(actor, target, effect, history, &self.difficulty, &self.config)
                };
                let dice = draws.next().unwrap_or_default();

                let verdict =
                    classify_roll(&dice, &context, effect.traits, &self.difficulty, &self.config)?;
                let degree = verdict.degree;
                if verdict.preempted {
                    warn!(
                        target: "tactics::calculator",
                        actor = %request.actor,
                        defender = %target_id,
                        degree = %degree,
                        "difficulty override preempted roll"
                    );
                }
                debug!(
                    target: "tactics::calculator",
                    actor = %request.actor,
                    defender = %target_id,
                    action = %request.action.id,
                    effect_index,
                    degree = %degree,
                    dice = ?dice.rolls(),
                    attacker_bonus = context.attacker_bonus,
                    defense_threshold = context.defense_threshold,
                    "resolved roll"
                );

                let target = roster.require_mut(target_id)?;
                let change = apply_effect(effect, target_id, &mut target.attributes, degree);
                record_change(
                    statistics,
                    &change,
                    context.actor_affiliation,
                    target.affiliation,
                );

                results.push(TargetResult {
                    target: target_id,
                    context,
                    dice,
                    changes: vec![change],
                });
            }
            effects.push(EffectResult {
                effect_index,
                targets: results,
            });
        }

        Ok(CalculatedResult {
            actor: request.actor,
            action_id: request.action.id.clone(),
            effects,
        })
    }

    /// Forecast an action without drawing dice or mutating anything.
    ///
    /// Each target gets one change per possible degree, tagged with how many
    /// dice pairs produce it. When an effect's outcome is certain, its
    /// result becomes the state later effects see for that squaddie.
    pub fn forecast_results<R>(
        &self,
        request: &ActionRequest<'_>,
        roster: &R,
        history: &(impl ActionHistory + ?Sized),
    ) -> Result<CalculatedResult, CombatError>
    where
        R: SquaddieRepository + ?Sized,
    {
        self.check(request, roster)?;

        let mut carried: BTreeMap<SquaddieId, BattleSquaddie> = BTreeMap::new();
        let lookup = |carried: &BTreeMap<SquaddieId, BattleSquaddie>, id: SquaddieId| {
            carried.get(&id).cloned().map_or_else(|| roster.require(id).cloned(), Ok)
        };

        let mut effects = Vec::with_capacity(request.action.effects.len());
        for (effect_index, (effect, targets)) in request
            .action
            .effects
            .iter()
            .zip(&request.targets)
            .enumerate()
        {
            let mut results = Vec::with_capacity(targets.len());
            for &target_id in targets {
                let actor = lookup(&carried, request.actor)?;
                let mut target = lookup(&carried, target_id)?;
                let context = build_roll_context(
                    &actor,
                    &target,
                    effect,
                    history,
                    &self.difficulty,
                    &self.config,
                );

                let distribution = forecast(&context, effect.traits, &self.difficulty, &self.config)?;
                trace!(
                    target: "tactics::calculator",
                    actor = %request.actor,
                    defender = %target_id,
                    action = %request.action.id,
                    effect_index,
                    distribution = ?distribution,
                    "forecast distribution"
                );

                let changes: Vec<_> = distribution
                    .iter_nonzero()
                    .map(|(degree, count)| {
                        simulate_effect(effect, target_id, &target.attributes, degree).with_chance(count)
                    })
                    .collect();

                if let (Some(_), [change]) = (distribution.certain(), changes.as_slice()) {
                    target.attributes = change.attributes_after.clone();
                    carried.insert(target_id, target);
                }

                results.push(TargetResult {
                    target: target_id,
                    context,
                    dice: DiceOutcome::not_rolled(),
                    changes,
                });
            }
            effects.push(EffectResult {
                effect_index,
                targets: results,
            });
        }

        Ok(CalculatedResult {
            actor: request.actor,
            action_id: request.action.id.clone(),
            effects,
        })
    }

    /// Shared pre-flight: request shape, die range, every id resolvable.
    fn check<R>(&self, request: &ActionRequest<'_>, roster: &R) -> Result<(), CombatError>
    where
        R: SquaddieRepository + ?Sized,
    {
        request.validate()?;
        self.config.validate()?;
        roster.require(request.actor)?;
        for id in request.target_ids() {
            roster.require(id)?;
        }
        Ok(())
    }
}
