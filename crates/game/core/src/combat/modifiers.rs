//! Roll modifier aggregation.
//!
//! Every total is recomputed from live state on each call. Both the
//! committed and forecast paths go through [`build_roll_context`].

use crate::action::ActionEffectTemplate;
use crate::config::CombatConfig;
use crate::env::{ActionHistory, DifficultySetting};
use crate::state::BattleSquaddie;

use super::penalty::multiple_attack_penalty;
use super::roll::{RollContext, RollModifier, RollModifierKind};

/// Attacker's total bonus and its named contributions.
///
/// # Formula
///
/// ```text
/// bonus = versus proficiency bonus (at the actor's tier)
///       + circumstance bonus for the actor's side
///       + multiple attack penalty (attacks only)
/// ```
pub fn attacker_bonus(
    actor: &BattleSquaddie,
    effect: &ActionEffectTemplate,
    history: &(impl ActionHistory + ?Sized),
    difficulty: &DifficultySetting,
    config: &CombatConfig,
) -> (i32, Vec<RollModifier>) {
    let army = actor.attributes.army();
    let proficiency = army.proficiency_versus(effect.versus).bonus(army.tier);
    let circumstance = difficulty.circumstance_bonus(actor.affiliation);
    let penalty = if effect.is_attack() {
        multiple_attack_penalty(actor.id, history, config)
    } else {
        0
    };

    collect([
        (RollModifierKind::VersusProficiency, proficiency),
        (RollModifierKind::Circumstance, circumstance),
        (RollModifierKind::MultipleAttackPenalty, penalty),
    ])
}

/// Target's defense threshold and its named contributions.
///
/// # Formula
///
/// ```text
/// threshold = defense baseline
///           + defense rating for the checked resistance (base + proficiency at tier)
///           + live modifiers of the matching attribute type
/// ```
pub fn defense_threshold(
    target: &BattleSquaddie,
    effect: &ActionEffectTemplate,
    config: &CombatConfig,
) -> (i32, Vec<RollModifier>) {
    let army = target.attributes.army();
    let rating = army.defense(effect.versus).value(army.tier);
    let modifiers = target
        .attributes
        .modifiers()
        .total(effect.versus.attribute_type());

    collect([
        (RollModifierKind::DefenseBaseline, config.defense_baseline),
        (RollModifierKind::DefenseRating, rating),
        (RollModifierKind::AttributeModifier, modifiers),
    ])
}

/// Assemble the full context for one (effect, target) roll.
pub fn build_roll_context(
    actor: &BattleSquaddie,
    target: &BattleSquaddie,
    effect: &ActionEffectTemplate,
    history: &(impl ActionHistory + ?Sized),
    difficulty: &DifficultySetting,
    config: &CombatConfig,
) -> RollContext {
    let (attacker_bonus, attacker_modifiers) =
        self::attacker_bonus(actor, effect, history, difficulty, config);
    let (defense_threshold, defender_modifiers) = self::defense_threshold(target, effect, config);

    RollContext {
        attacker_bonus,
        defense_threshold,
        attacker_modifiers,
        defender_modifiers,
        actor_affiliation: actor.affiliation,
        target_affiliation: target.affiliation,
    }
}

/// Sum the contributions and keep the non-zero ones for explanation.
fn collect<const N: usize>(parts: [(RollModifierKind, i32); N]) -> (i32, Vec<RollModifier>) {
    let total = parts.iter().map(|&(_, amount)| amount).sum();
    let named = parts
        .into_iter()
        .filter(|&(_, amount)| amount != 0)
        .map(|(kind, amount)| RollModifier::new(kind, amount))
        .collect();
    (total, named)
}
