//! Effect application.
//!
//! [`apply_effect`] is the only place an effect changes squaddie state.
//! [`simulate_effect`] runs it against a disposable copy.

use crate::action::ActionEffectTemplate;
use crate::state::SquaddieId;
use crate::stats::InBattleAttributes;

use super::damage::{DamageExplanation, scaled_damage};
use super::degree::DegreeOfSuccess;
use super::result::SquaddieChange;

/// Healing and modifier grants land on these degrees.
fn lands(degree: DegreeOfSuccess) -> bool {
    degree.is_success() || degree == DegreeOfSuccess::None
}

/// Commit one effect to one target.
///
/// Order: damage (through absorb, then hit points), healing, modifier grants.
pub fn apply_effect(
    effect: &ActionEffectTemplate,
    target: SquaddieId,
    attributes: &mut InBattleAttributes,
    degree: DegreeOfSuccess,
) -> SquaddieChange {
    let attributes_before = attributes.clone();

    let raw = scaled_damage(effect.total_damage(), degree, effect.is_attack());
    let damage = if raw > 0 {
        let hit_points_before = attributes.current_hit_points();
        let taken = attributes.take_damage(raw);
        let penetrating = raw - taken.absorbed;
        DamageExplanation {
            raw,
            absorbed: taken.absorbed,
            net: taken.hit_points_lost,
            will_ko: penetrating > 0 && penetrating >= hit_points_before,
        }
    } else {
        DamageExplanation::NONE
    };

    let mut healing_received = 0;
    if lands(degree) {
        healing_received = attributes.receive_healing(effect.total_healing());
        for modifier in &effect.attribute_modifiers {
            attributes.add_modifier(modifier.clone());
        }
    }

    SquaddieChange {
        target,
        degree,
        damage,
        healing_received,
        attributes_before,
        attributes_after: attributes.clone(),
        chance_of_degree_of_success: None,
    }
}

/// What [`apply_effect`] would report, without touching `attributes`.
pub fn simulate_effect(
    effect: &ActionEffectTemplate,
    target: SquaddieId,
    attributes: &InBattleAttributes,
    degree: DegreeOfSuccess,
) -> SquaddieChange {
    let mut scratch = attributes.clone();
    apply_effect(effect, target, &mut scratch, degree)
}
