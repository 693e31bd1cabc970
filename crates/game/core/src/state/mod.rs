//! Battle state the combat layer reads and writes.
//!
//! Everything here is owned by the caller (the battle loop) and handed to the
//! action calculator by reference for the duration of one resolution.
pub mod roster;
pub mod statistics;
pub mod types;

pub use roster::{SquaddieRepository, SquaddieRoster};
pub use statistics::MissionStatistics;
pub use types::{Affiliation, BattleSquaddie, SquaddieId};
