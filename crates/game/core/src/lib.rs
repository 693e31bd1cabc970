//! Deterministic action resolution for squad tactics battles.
//!
//! `tactics-core` turns one squaddie's chosen action against already-resolved
//! targets into either a committed outcome (damage, healing and modifiers
//! applied, statistics updated) or an exact probability forecast that
//! mutates nothing. Both entry points live on [`ActionCalculator`].
//!
//! Randomness, turn history and difficulty are supplied by the caller (see
//! [`env`]), so every resolution can be replayed from a scripted stream.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{
    ActionEffectTemplate, ActionTemplate, EffectTraits, HealingType, TargetRelation,
};
pub use combat::{
    ActionCalculator, ActionRequest, CalculatedResult, CombatError, DamageExplanation, DamageType,
    DegreeDistribution, DegreeOfSuccess, DiceOutcome, EffectResult, RollContext, RollModifier,
    RollModifierKind, RollVerdict, SquaddieChange, TargetResult,
};
pub use config::CombatConfig;
pub use env::{
    ActionHistory, ActionRecord, ChallengeModifier, DifficultyOverride, DifficultySetting,
    NumberGenerator, RandomNumberGenerator, SeededNumberGenerator, StreamNumberGenerator,
    TurnActionLog,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Affiliation, BattleSquaddie, MissionStatistics, SquaddieId, SquaddieRepository, SquaddieRoster,
};
pub use stats::{
    ArmyAttributes, AttributeModifier, AttributeModifierSet, AttributeSource, AttributeType,
    DefenseRating, InBattleAttributes, ProficiencyLevel, ResistanceType,
};
