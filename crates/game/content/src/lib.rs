//! Data-driven battle content and loaders.
//!
//! Content is authored as RON (action templates, rosters) and TOML (combat
//! rules) and deserialized straight into `tactics-core` types:
//! - [`loaders::ActionTemplateRegistry`] for the action catalog, with the
//!   bundled templates embedded at compile time
//! - [`loaders::RosterLoader`] for squaddie rosters
//! - [`loaders::ConfigLoader`] for combat rule tuning
//! - [`loaders::ContentFactory`] tying the three together over a data directory

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionTemplateRegistry, ConfigLoader, ContentFactory, LoadResult, RosterLoader, SquaddieSpec,
};
