//! Exhaustive roll forecasting.
//!
//! A forecast walks the whole two-dice sample space and classifies every
//! pair with [`classify`], the same function the committed path uses. The
//! distribution is therefore exact by construction; no random draws happen.

use crate::action::{EffectTraits, requires_roll};
use crate::config::CombatConfig;
use crate::env::DifficultySetting;

use super::degree::DegreeOfSuccess;
use super::error::CombatError;
use super::roll::{DiceOutcome, RollContext, classify};

/// Count of dice pairs per degree of success.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeDistribution {
    counts: [u32; DegreeOfSuccess::ALL.len()],
}

impl DegreeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, degree: DegreeOfSuccess, count: u32) {
        self.counts[degree.index()] += count;
    }

    pub fn count(&self, degree: DegreeOfSuccess) -> u32 {
        self.counts[degree.index()]
    }

    /// Size of the sample space the distribution covers.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Non-empty buckets in forecast order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (DegreeOfSuccess, u32)> + '_ {
        DegreeOfSuccess::ALL
            .into_iter()
            .map(|degree| (degree, self.count(degree)))
            .filter(|&(_, count)| count > 0)
    }

    /// The only possible degree, when the outcome is certain.
    pub fn certain(&self) -> Option<DegreeOfSuccess> {
        let mut buckets = self.iter_nonzero();
        match (buckets.next(), buckets.next()) {
            (Some((degree, _)), None) => Some(degree),
            _ => None,
        }
    }
}

/// Distribution of degrees over every dice pair.
///
/// Effects that draw no dice land in a single bucket weighted with the full
/// sample space, so `total()` is always `faces²`.
pub fn forecast(
    context: &RollContext,
    traits: EffectTraits,
    difficulty: &DifficultySetting,
    config: &CombatConfig,
) -> Result<DegreeDistribution, CombatError> {
    config.validate()?;
    let mut distribution = DegreeDistribution::new();

    if !requires_roll(traits) {
        let degree = classify(&DiceOutcome::not_rolled(), context, traits, difficulty, config)?;
        distribution.record(degree, config.sample_space());
        return Ok(distribution);
    }

    for first in config.die_min..=config.die_max {
        for second in config.die_min..=config.die_max {
            let dice = DiceOutcome::rolled(first, second);
            let degree = classify(&dice, context, traits, difficulty, config)?;
            distribution.record(degree, 1);
        }
    }
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(attacker_bonus: i32, defense_threshold: i32) -> RollContext {
        RollContext {
            attacker_bonus,
            defense_threshold,
            ..RollContext::default()
        }
    }

    fn attack_forecast(context: &RollContext, traits: EffectTraits) -> DegreeDistribution {
        forecast(
            context,
            EffectTraits::ATTACK | traits,
            &DifficultySetting::normal(),
            &CombatConfig::default(),
        )
        .expect("valid config")
    }

    #[test]
    fn covers_the_full_sample_space() {
        let distribution = attack_forecast(&context(0, 7), EffectTraits::empty());
        assert_eq!(distribution.total(), 36);
        // double one
        assert_eq!(distribution.count(DegreeOfSuccess::CriticalFailure), 1);
        assert_eq!(distribution.count(DegreeOfSuccess::None), 0);
    }

    #[test]
    fn even_odds_split_around_seven() {
        // sums 7..=12 hit (21 pairs); double six is the only critical success.
        let distribution = attack_forecast(&context(0, 7), EffectTraits::empty());
        assert_eq!(distribution.count(DegreeOfSuccess::CriticalSuccess), 1);
        assert_eq!(distribution.count(DegreeOfSuccess::Success), 20);
        assert_eq!(distribution.count(DegreeOfSuccess::Failure), 14);
    }

    #[test]
    fn uncontested_effects_are_certain() {
        let distribution = forecast(
            &context(0, 7),
            EffectTraits::HEALING,
            &DifficultySetting::normal(),
            &CombatConfig::default(),
        )
        .expect("valid config");
        assert_eq!(distribution.certain(), Some(DegreeOfSuccess::None));
        assert_eq!(distribution.count(DegreeOfSuccess::None), 36);
    }

    #[test]
    fn suppression_moves_critical_weight() {
        let open = attack_forecast(&context(0, 7), EffectTraits::empty());
        let capped = attack_forecast(&context(0, 7), EffectTraits::CANNOT_CRITICALLY_FAIL);
        assert_eq!(capped.count(DegreeOfSuccess::CriticalFailure), 0);
        assert_eq!(
            capped.count(DegreeOfSuccess::Failure),
            open.count(DegreeOfSuccess::Failure) + open.count(DegreeOfSuccess::CriticalFailure)
        );
    }

    #[test]
    fn iter_nonzero_follows_forecast_order() {
        let distribution = attack_forecast(&context(0, 7), EffectTraits::empty());
        let degrees: Vec<_> = distribution.iter_nonzero().map(|(degree, _)| degree).collect();
        assert_eq!(
            degrees,
            vec![
                DegreeOfSuccess::CriticalSuccess,
                DegreeOfSuccess::Success,
                DegreeOfSuccess::Failure,
                DegreeOfSuccess::CriticalFailure,
            ]
        );
        assert_eq!(distribution.certain(), None);
    }

    #[test]
    fn invalid_die_range_is_rejected() {
        let result = forecast(
            &context(0, 7),
            EffectTraits::ATTACK,
            &DifficultySetting::normal(),
            &CombatConfig::default().with_die_range(4, 2),
        );
        assert_eq!(result, Err(CombatError::InvalidDieRange { min: 4, max: 2 }));
    }
}
