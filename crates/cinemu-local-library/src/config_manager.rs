use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{Level, info, instrument};

use crate::{error::ConfigError, library_config::LibraryConfig};

/// Owns the settings file and the configuration read from it.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: LibraryConfig,
}

impl ConfigManager {
    /// Reads `path`, falling back to defaults when the file is missing.
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();

        let config = if path.exists() {
            LibraryConfig::from_file(&path)?
        } else {
            info!("No settings file, using defaults");
            LibraryConfig::default()
        };

        Ok(Self { path, config })
    }

    pub fn get(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `updater` and writes the result back to disk.
    pub fn update<F>(&mut self, updater: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut LibraryConfig),
    {
        updater(&mut self.config);
        self.save()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        cinemu_paths::ensure_parent(&self.path)?;
        fs::write(&self.path, self.config.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{library_config::StorageBackend, session::DuplicatePolicy};
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults_without_creating_it() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.toml");

        let manager = ConfigManager::load(&path).unwrap();
        assert_eq!(manager.get(), &LibraryConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn update_persists_changes() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config").join("settings.toml");

        let mut manager = ConfigManager::load(&path).unwrap();
        manager
            .update(|cfg| {
                cfg.storage = StorageBackend::Sqlite("movies.db".into());
                cfg.duplicate_policy = DuplicatePolicy::Allow;
            })
            .unwrap();

        let reloaded = ConfigManager::load(&path).unwrap();
        assert_eq!(reloaded.get(), manager.get());
        assert_eq!(reloaded.get().storage, StorageBackend::Sqlite("movies.db".into()));
    }
}
