pub mod common;
pub mod squaddie;

pub use common::{Affiliation, SquaddieId};
pub use squaddie::BattleSquaddie;
