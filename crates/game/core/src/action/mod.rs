//! Action definitions.
//!
//! Actions are pure data: content loaders build them once and the combat
//! layer only reads them.
pub mod template;

pub use template::{
    ActionEffectTemplate, ActionTemplate, EffectTraits, HealingType, TargetRelation, requires_roll,
};
