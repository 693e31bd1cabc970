//! Content factory over a data directory.
//!
//! Expected layout:
//!
//! ```text
//! <data_dir>/
//!   combat.toml
//!   actions/*.ron
//!   rosters/<name>.ron
//! ```

use std::path::{Path, PathBuf};

use tactics_core::{CombatConfig, SquaddieRoster};

use crate::loaders::{ActionTemplateRegistry, ConfigLoader, LoadResult, RosterLoader};

/// Loads battle content from a directory on disk.
#[derive(Debug, Clone)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `combat.toml`, falling back to defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("combat.toml");
        if !path.exists() {
            tracing::debug!(
                target: "tactics::content",
                path = %path.display(),
                "no combat config found, using defaults"
            );
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load every `actions/*.ron` file into one registry.
    ///
    /// Files are read in name order so duplicate-id errors are reproducible.
    pub fn load_actions(&self) -> LoadResult<ActionTemplateRegistry> {
        let dir = self.data_dir.join("actions");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
                .path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = ActionTemplateRegistry::new();
        for path in &paths {
            let content = crate::loaders::read_file(path)?;
            registry
                .extend_from_ron_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
        }
        Ok(registry)
    }

    /// Load `rosters/<name>.ron`.
    pub fn load_roster(&self, name: &str) -> LoadResult<SquaddieRoster> {
        RosterLoader::load(&self.data_dir.join("rosters").join(format!("{name}.ron")))
    }
}
