use proptest::prelude::*;

use tactics_core::combat::{classify, forecast};
use tactics_core::{
    ActionCalculator, ActionEffectTemplate, ActionRequest, ActionTemplate, Affiliation,
    ArmyAttributes, AttributeModifier, AttributeSource, AttributeType, BattleSquaddie,
    CombatConfig, DamageType, DegreeDistribution, DegreeOfSuccess, DiceOutcome,
    DifficultySetting, EffectTraits, HealingType, InBattleAttributes, MissionStatistics,
    ProficiencyLevel, ResistanceType, RollContext, SquaddieId, SquaddieRepository,
    SquaddieRoster, StreamNumberGenerator, TurnActionLog,
};

const HERO: SquaddieId = SquaddieId(1);
const BANDIT: SquaddieId = SquaddieId(2);

fn traits() -> impl Strategy<Value = EffectTraits> {
    (0u16..32).prop_map(EffectTraits::from_bits_truncate)
}

fn proficiency() -> impl Strategy<Value = ProficiencyLevel> {
    prop_oneof![
        Just(ProficiencyLevel::Untrained),
        Just(ProficiencyLevel::Novice),
        Just(ProficiencyLevel::Expert),
        Just(ProficiencyLevel::Master),
        Just(ProficiencyLevel::Legendary),
    ]
}

fn context() -> impl Strategy<Value = RollContext> {
    (-15i32..=15, -5i32..=25).prop_map(|(attacker_bonus, defense_threshold)| RollContext {
        attacker_bonus,
        defense_threshold,
        ..RollContext::default()
    })
}

fn distribution(context: &RollContext, traits: EffectTraits) -> DegreeDistribution {
    forecast(
        context,
        traits,
        &DifficultySetting::normal(),
        &CombatConfig::default(),
    )
    .expect("valid config")
}

fn duel(
    attacker: (ProficiencyLevel, u8),
    defender: (ProficiencyLevel, i32, u8),
    armor_buff: i32,
) -> SquaddieRoster {
    let (attack_proficiency, attack_tier) = attacker;
    let (armor_proficiency, armor_base, defense_tier) = defender;

    let hero = ArmyAttributes::new(5)
        .with_tier(attack_tier)
        .with_versus_proficiency(ResistanceType::Armor, attack_proficiency);
    let bandit = InBattleAttributes::new(
        ArmyAttributes::new(5)
            .with_tier(defense_tier)
            .with_armor(armor_proficiency, armor_base),
    )
    .with_modifier(AttributeModifier::new(
        AttributeType::Armor,
        armor_buff,
        AttributeSource::Spiritual,
    ));

    [
        BattleSquaddie::new(HERO, "hero", Affiliation::Player, hero),
        BattleSquaddie::new(BANDIT, "bandit", Affiliation::Enemy, ArmyAttributes::default())
            .with_attributes(bandit),
    ]
    .into_iter()
    .collect()
}

proptest! {
    #[test]
    fn forecast_counts_each_pair_under_its_resolved_degree(
        context in context(),
        traits in traits(),
    ) {
        let config = CombatConfig::default();
        let difficulty = DifficultySetting::normal();
        let forecast = distribution(&context, traits);

        if traits.contains(EffectTraits::ATTACK) && !traits.contains(EffectTraits::ALWAYS_SUCCEEDS) {
            let mut replayed = DegreeDistribution::new();
            for first in 1..=6 {
                for second in 1..=6 {
                    let dice = DiceOutcome::rolled(first, second);
                    let degree = classify(&dice, &context, traits, &difficulty, &config)
                        .expect("dice in range");
                    replayed.record(degree, 1);
                }
            }
            prop_assert_eq!(replayed, forecast);
        } else {
            let degree = classify(&DiceOutcome::not_rolled(), &context, traits, &difficulty, &config)
                .expect("no dice needed");
            prop_assert_eq!(forecast.certain(), Some(degree));
        }
    }

    #[test]
    fn forecast_always_covers_the_whole_sample_space(
        context in context(),
        traits in traits(),
    ) {
        prop_assert_eq!(distribution(&context, traits).total(), 36);
    }

    #[test]
    fn suppressing_critical_failure_folds_into_failure(
        context in context(),
        traits in traits(),
    ) {
        let open = distribution(&context, traits - EffectTraits::CANNOT_CRITICALLY_FAIL);
        let capped = distribution(&context, traits | EffectTraits::CANNOT_CRITICALLY_FAIL);

        prop_assert_eq!(capped.count(DegreeOfSuccess::CriticalFailure), 0);
        prop_assert_eq!(
            capped.count(DegreeOfSuccess::Failure),
            open.count(DegreeOfSuccess::Failure) + open.count(DegreeOfSuccess::CriticalFailure)
        );
        prop_assert_eq!(capped.count(DegreeOfSuccess::Success), open.count(DegreeOfSuccess::Success));
        prop_assert_eq!(
            capped.count(DegreeOfSuccess::CriticalSuccess),
            open.count(DegreeOfSuccess::CriticalSuccess)
        );
    }

    #[test]
    fn suppressing_critical_success_folds_into_success(
        context in context(),
        traits in traits(),
    ) {
        let open = distribution(&context, traits - EffectTraits::CANNOT_CRITICALLY_SUCCEED);
        let capped = distribution(&context, traits | EffectTraits::CANNOT_CRITICALLY_SUCCEED);

        prop_assert_eq!(capped.count(DegreeOfSuccess::CriticalSuccess), 0);
        prop_assert_eq!(
            capped.count(DegreeOfSuccess::Success),
            open.count(DegreeOfSuccess::Success) + open.count(DegreeOfSuccess::CriticalSuccess)
        );
        prop_assert_eq!(capped.count(DegreeOfSuccess::Failure), open.count(DegreeOfSuccess::Failure));
        prop_assert_eq!(
            capped.count(DegreeOfSuccess::CriticalFailure),
            open.count(DegreeOfSuccess::CriticalFailure)
        );
    }

    #[test]
    fn committed_rolls_match_the_forecast(
        attacker in (proficiency(), 0u8..4),
        defender in (proficiency(), -2i32..4, 0u8..4),
        armor_buff in -3i32..4,
        traits in traits(),
        first in 1u32..=6,
        second in 1u32..=6,
    ) {
        let roster = duel(attacker, defender, armor_buff);
        let action = ActionTemplate::new("probe", "Probe").with_effect(
            ActionEffectTemplate::new()
                .with_traits(traits)
                .with_damage(DamageType::Body, 1),
        );
        let request = ActionRequest::with_shared_targets(HERO, &action, &[BANDIT]);
        let calculator = ActionCalculator::default();
        let log = TurnActionLog::new();

        let forecast = calculator
            .forecast_results(&request, &roster, &log)
            .expect("forecasts");
        let mut committed_roster = roster.clone();
        let committed = calculator
            .calculate_and_apply_results(
                &request,
                &mut committed_roster,
                &log,
                &mut StreamNumberGenerator::new([first, second]),
                &mut MissionStatistics::new(),
            )
            .expect("resolves");

        let predicted = &forecast.effects[0].targets[0];
        let actual = &committed.effects[0].targets[0];
        prop_assert_eq!(&predicted.context, &actual.context);

        let degree = actual.change().map(|change| change.degree).expect("one change");
        let matching = predicted
            .changes
            .iter()
            .find(|change| change.degree == degree)
            .expect("committed degree was forecast");
        prop_assert!(matching.chance_of_degree_of_success.unwrap_or(0) > 0);
        prop_assert_eq!(matching.damage, actual.change().map(|change| change.damage).unwrap_or_default());
    }

    #[test]
    fn hit_points_stay_within_bounds(
        max_hit_points in 1u32..20,
        start in 0u32..25,
        events in prop::collection::vec((any::<bool>(), 0u32..30), 0..20),
    ) {
        let mut attributes = InBattleAttributes::new(ArmyAttributes::new(max_hit_points))
            .with_current_hit_points(start);
        prop_assert!(attributes.current_hit_points() <= max_hit_points);

        for (is_damage, amount) in events {
            let before = attributes.current_hit_points();
            if is_damage {
                let taken = attributes.take_damage(amount);
                prop_assert_eq!(taken.hit_points_lost, before - attributes.current_hit_points());
            } else {
                let healed = attributes.receive_healing(amount);
                prop_assert_eq!(healed, attributes.current_hit_points() - before);
            }
            prop_assert!(attributes.current_hit_points() <= max_hit_points);
        }
    }

    #[test]
    fn forecasting_is_idempotent_and_pure(
        attacker in (proficiency(), 0u8..4),
        defender in (proficiency(), -2i32..4, 0u8..4),
        armor_buff in -3i32..4,
        prior_attacks in 0usize..3,
    ) {
        let roster = duel(attacker, defender, armor_buff);
        let snapshot = roster.clone();
        let action = ActionTemplate::new("combo", "Combo")
            .with_effect(ActionEffectTemplate::attack().with_damage(DamageType::Body, 2))
            .with_effect(ActionEffectTemplate::new().with_healing(HealingType::LostHitPoints, 1));
        let mut log = TurnActionLog::new();
        for _ in 0..prior_attacks {
            log.record(HERO, &action);
        }
        let request = ActionRequest::new(HERO, &action, vec![vec![BANDIT], vec![HERO]]);
        let calculator = ActionCalculator::default();

        let first = calculator.forecast_results(&request, &roster, &log).expect("forecasts");
        let second = calculator.forecast_results(&request, &roster, &log).expect("forecasts");

        prop_assert_eq!(first, second);
        prop_assert_eq!(roster, snapshot);
    }

    #[test]
    fn attack_penalty_only_grows_within_a_turn(attacks in 0u32..6) {
        let roster = duel((ProficiencyLevel::Untrained, 0), (ProficiencyLevel::Untrained, 1, 0), 0);
        let action = ActionTemplate::new("strike", "Strike")
            .with_effect(ActionEffectTemplate::attack().with_damage(DamageType::Body, 1));
        let request = ActionRequest::with_shared_targets(HERO, &action, &[BANDIT]);
        let calculator = ActionCalculator::default();
        let mut log = TurnActionLog::new();

        let bonus = |log: &TurnActionLog| {
            calculator
                .forecast_results(&request, &roster, log)
                .map(|result| result.effects[0].targets[0].context.attacker_bonus)
                .expect("forecasts")
        };

        let mut previous = bonus(&log);
        prop_assert_eq!(previous, 0);
        for count in 1..=attacks {
            log.record(HERO, &action);
            let current = bonus(&log);
            prop_assert!(current <= previous);
            prop_assert_eq!(current, -3 * count as i32);
            previous = current;
        }

        log.start_turn();
        prop_assert_eq!(bonus(&log), 0);
    }
}

#[test]
fn duel_fixture_applies_the_armor_buff() {
    let roster = duel((ProficiencyLevel::Untrained, 0), (ProficiencyLevel::Untrained, 1, 0), 2);
    let bandit = roster.require(BANDIT).expect("bandit exists");
    assert_eq!(bandit.attributes.modifiers().total(AttributeType::Armor), 2);
    assert_eq!(bandit.attributes.current_hit_points(), 5);
}
