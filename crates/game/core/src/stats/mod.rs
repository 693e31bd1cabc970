//! Squaddie combat statistics.
//!
//! ```text
//! [ ProficiencyLevel + tier ]      rank-based bonus, 0 when untrained
//!      ↓
//! [ ArmyAttributes ]               permanent sheet: HP max, defenses, versus table
//!      ↓
//! [ InBattleAttributes ]           current HP + live AttributeModifierSet
//! ```
//!
//! Derived values (defense totals, modifier sums) are never stored; they are
//! recomputed from the live state whenever the combat layer asks for them.

pub mod attributes;
pub mod modifiers;
pub mod proficiency;

pub use attributes::{
    ArmyAttributes, DamageTaken, DefenseRating, InBattleAttributes, ResistanceType,
};
pub use modifiers::{AttributeModifier, AttributeModifierSet, AttributeSource, AttributeType};
pub use proficiency::ProficiencyLevel;
