use crate::combat::CombatError;

/// Combat rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Lowest face of each die.
    pub die_min: u32,
    /// Highest face of each die.
    pub die_max: u32,
    /// Penalty added per prior attack this turn (stored positive, applied negative).
    pub multiple_attack_penalty: i32,
    /// Margin at which a roll becomes a critical success (or, negated, a critical failure).
    pub critical_margin: i32,
    /// Flat value every defense threshold starts from.
    pub defense_baseline: i32,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Dice drawn per contested roll.
    pub const DICE_PER_ROLL: usize = 2;
    /// Highest die face a config may declare. Keeps the sample space small
    /// enough to enumerate and far from `u32` overflow.
    pub const MAX_DIE_FACE: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DIE_MIN: u32 = 1;
    pub const DEFAULT_DIE_MAX: u32 = 6;
    pub const DEFAULT_MULTIPLE_ATTACK_PENALTY: i32 = 3;
    pub const DEFAULT_CRITICAL_MARGIN: i32 = 6;
    pub const DEFAULT_DEFENSE_BASELINE: i32 = 6;

    pub fn new() -> Self {
        Self {
            die_min: Self::DEFAULT_DIE_MIN,
            die_max: Self::DEFAULT_DIE_MAX,
            multiple_attack_penalty: Self::DEFAULT_MULTIPLE_ATTACK_PENALTY,
            critical_margin: Self::DEFAULT_CRITICAL_MARGIN,
            defense_baseline: Self::DEFAULT_DEFENSE_BASELINE,
        }
    }

    pub fn with_die_range(mut self, die_min: u32, die_max: u32) -> Self {
        self.die_min = die_min;
        self.die_max = die_max;
        self
    }

    pub fn with_multiple_attack_penalty(mut self, multiple_attack_penalty: i32) -> Self {
        self.multiple_attack_penalty = multiple_attack_penalty;
        self
    }

    pub fn with_critical_margin(mut self, critical_margin: i32) -> Self {
        self.critical_margin = critical_margin;
        self
    }

    pub fn with_defense_baseline(mut self, defense_baseline: i32) -> Self {
        self.defense_baseline = defense_baseline;
        self
    }

    /// Rejects configs the rules cannot run under.
    ///
    /// - die range must be `1 <= die_min <= die_max <= MAX_DIE_FACE`
    /// - `multiple_attack_penalty` must not be negative (it would become a bonus)
    /// - `critical_margin` must be at least 1
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.die_min == 0 || self.die_min > self.die_max || self.die_max > Self::MAX_DIE_FACE {
            return Err(CombatError::InvalidDieRange {
                min: self.die_min,
                max: self.die_max,
            });
        }
        if self.multiple_attack_penalty < 0 {
            return Err(CombatError::InvalidCombatRule {
                rule: "multiple_attack_penalty".into(),
                value: self.multiple_attack_penalty,
            });
        }
        if self.critical_margin < 1 {
            return Err(CombatError::InvalidCombatRule {
                rule: "critical_margin".into(),
                value: self.critical_margin,
            });
        }
        Ok(())
    }

    /// Number of faces on each die.
    pub fn faces(&self) -> u32 {
        self.die_max - self.die_min + 1
    }

    /// Size of the two-dice sample space (36 for a pair of d6).
    pub fn sample_space(&self) -> u32 {
        self.faces() * self.faces()
    }

    pub fn contains_die(&self, value: u32) -> bool {
        (self.die_min..=self.die_max).contains(&value)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
