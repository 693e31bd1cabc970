//! Content loaders for reading battle data from files.
//!
//! Action templates and rosters are RON, combat configuration is TOML. Every
//! loader hands back `tactics-core` types directly.

pub mod actions;
pub mod config;
pub mod factory;
pub mod roster;

pub use actions::ActionTemplateRegistry;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use roster::{RosterLoader, SquaddieSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
