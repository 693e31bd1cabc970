//! Mission statistics attribution.

use crate::state::{Affiliation, MissionStatistics};

use super::degree::DegreeOfSuccess;
use super::result::SquaddieChange;

/// Add one committed change to the team counters.
///
/// Damage dealt only counts when a player squaddie hurts a non-player one.
/// Damage taken, absorbed, and healing count whenever the target is on the
/// player team, whoever caused them.
pub fn record_change(
    statistics: &mut MissionStatistics,
    change: &SquaddieChange,
    actor_affiliation: Affiliation,
    target_affiliation: Affiliation,
) {
    let actor_is_player = actor_affiliation.is_player_team();
    let target_is_player = target_affiliation.is_player_team();

    if actor_is_player && !target_is_player {
        add(&mut statistics.damage_dealt_by_player_team, change.damage.net);
        match change.degree {
            DegreeOfSuccess::CriticalSuccess => add(&mut statistics.critical_hits_dealt_by_player_team, 1),
            DegreeOfSuccess::CriticalFailure => add(&mut statistics.critical_misses_by_player_team, 1),
            _ => {}
        }
    }

    if target_is_player && !actor_is_player {
        match change.degree {
            DegreeOfSuccess::CriticalSuccess => add(&mut statistics.critical_hits_taken_by_player_team, 1),
            DegreeOfSuccess::CriticalFailure => add(&mut statistics.critical_misses_by_enemies, 1),
            _ => {}
        }
    }

    if target_is_player {
        add(&mut statistics.damage_taken_by_player_team, change.damage.net);
        add(&mut statistics.damage_absorbed_by_player_team, change.damage.absorbed);
        add(&mut statistics.healing_received_by_player_team, change.healing_received);
    }
}

/// Counters pin at `u32::MAX` instead of wrapping.
fn add(counter: &mut u32, amount: u32) {
    *counter = counter.saturating_add(amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DamageExplanation;
    use crate::state::SquaddieId;
    use crate::stats::{ArmyAttributes, InBattleAttributes};

    fn change(degree: DegreeOfSuccess, net: u32, absorbed: u32) -> SquaddieChange {
        let attributes = InBattleAttributes::new(ArmyAttributes::new(5));
        SquaddieChange {
            target: SquaddieId(2),
            degree,
            damage: DamageExplanation {
                raw: net + absorbed,
                absorbed,
                net,
                will_ko: false,
            },
            healing_received: 0,
            attributes_before: attributes.clone(),
            attributes_after: attributes,
            chance_of_degree_of_success: None,
        }
    }

    #[test]
    fn player_critical_hit_on_enemy() {
        let mut statistics = MissionStatistics::new();
        record_change(
            &mut statistics,
            &change(DegreeOfSuccess::CriticalSuccess, 4, 0),
            Affiliation::Player,
            Affiliation::Enemy,
        );
        assert_eq!(statistics.damage_dealt_by_player_team, 4);
        assert_eq!(statistics.critical_hits_dealt_by_player_team, 1);
        assert_eq!(statistics.damage_taken_by_player_team, 0);
    }

    #[test]
    fn enemy_hit_on_player_counts_taken_and_absorbed() {
        let mut statistics = MissionStatistics::new();
        record_change(
            &mut statistics,
            &change(DegreeOfSuccess::Success, 1, 1),
            Affiliation::Enemy,
            Affiliation::Player,
        );
        assert_eq!(statistics.damage_taken_by_player_team, 1);
        assert_eq!(statistics.damage_absorbed_by_player_team, 1);
        assert_eq!(statistics.damage_dealt_by_player_team, 0);
    }

    #[test]
    fn critical_misses_are_split_by_side() {
        let mut statistics = MissionStatistics::new();
        let fumble = change(DegreeOfSuccess::CriticalFailure, 0, 0);
        record_change(&mut statistics, &fumble, Affiliation::Player, Affiliation::Enemy);
        record_change(&mut statistics, &fumble, Affiliation::Enemy, Affiliation::Player);
        assert_eq!(statistics.critical_misses_by_player_team, 1);
        assert_eq!(statistics.critical_misses_by_enemies, 1);
    }

    #[test]
    fn fights_without_the_player_are_not_recorded() {
        let mut statistics = MissionStatistics::new();
        record_change(
            &mut statistics,
            &change(DegreeOfSuccess::CriticalSuccess, 3, 0),
            Affiliation::Enemy,
            Affiliation::Ally,
        );
        assert_eq!(statistics, MissionStatistics::default());
    }

    #[test]
    fn damage_totals_saturate() {
        let mut statistics = MissionStatistics::new();
        let huge = change(DegreeOfSuccess::Success, u32::MAX, 0);
        record_change(&mut statistics, &huge, Affiliation::Player, Affiliation::Enemy);
        record_change(&mut statistics, &huge, Affiliation::Player, Affiliation::Enemy);
        assert_eq!(statistics.damage_dealt_by_player_team, u32::MAX);
    }
}
