//! Multiple attack penalty.

use crate::config::CombatConfig;
use crate::env::ActionHistory;
use crate::state::SquaddieId;

/// Penalty for an actor's next attack this turn.
///
/// # Formula
///
/// ```text
/// penalty = -(increment × prior_attacks_this_turn)
/// ```
///
/// Recomputed from the history on every call, so asking "what if I attack
/// again" never changes anything.
pub fn multiple_attack_penalty(
    actor: SquaddieId,
    history: &(impl ActionHistory + ?Sized),
    config: &CombatConfig,
) -> i32 {
    let prior_attacks =
        i32::try_from(history.count_prior_attacks_this_turn(actor)).unwrap_or(i32::MAX);
    config
        .multiple_attack_penalty
        .saturating_mul(prior_attacks)
        .saturating_neg()
}
