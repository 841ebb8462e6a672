use config::{Config, File, FileFormat};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{error::ConfigError, session::DuplicatePolicy};

/// Where the catalog is persisted. Relative paths are resolved against the
/// data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum StorageBackend {
    JsonLines(PathBuf),
    Sqlite(PathBuf),
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::JsonLines("moviecollection.jsonl".into())
    }
}

impl StorageBackend {
    pub fn path(&self) -> &Path {
        match self {
            StorageBackend::JsonLines(path) | StorageBackend::Sqlite(path) => path,
        }
    }

    pub fn resolve(&self, data_dir: &Path) -> StorageBackend {
        let absolute = data_dir.join(self.path());
        match self {
            StorageBackend::JsonLines(_) => StorageBackend::JsonLines(absolute),
            StorageBackend::Sqlite(_) => StorageBackend::Sqlite(absolute),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct LibraryConfig {
    /// What `add` does when the title is already cataloged and the caller
    /// did not say.
    pub duplicate_policy: DuplicatePolicy,
    pub storage: StorageBackend,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            duplicate_policy: DuplicatePolicy::Skip,
            storage: StorageBackend::default(),
        }
    }
}

impl LibraryConfig {
    pub fn builder() -> LibraryConfigBuilder {
        LibraryConfigBuilder::default()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()?;
        Ok(cfg.try_deserialize::<LibraryConfig>()?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::tempdir;

    #[test]
    fn builder_fills_unset_fields_with_defaults() {
        let config = LibraryConfig::builder()
            .storage(StorageBackend::Sqlite("catalog.db".into()))
            .build()
            .unwrap();

        assert_eq!(config.storage, StorageBackend::Sqlite("catalog.db".into()));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Skip);
    }

    #[test]
    fn reads_toml_settings() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(
            &path,
            indoc! {r#"
                duplicate_policy = "allow"

                [storage]
                type = "sqlite"
                path = "/srv/movies.db"
            "#},
        )
        .unwrap();

        let config = LibraryConfig::from_file(&path).unwrap();
        assert_eq!(config.storage, StorageBackend::Sqlite("/srv/movies.db".into()));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Allow);
    }

    #[test]
    fn empty_settings_file_means_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(LibraryConfig::from_file(&path).unwrap(), LibraryConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.toml");
        let config = LibraryConfig {
            duplicate_policy: DuplicatePolicy::Allow,
            storage: StorageBackend::Sqlite("catalog.db".into()),
        };

        std::fs::write(&path, config.to_toml().unwrap()).unwrap();
        assert_eq!(LibraryConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn relative_storage_paths_resolve_against_data_dir() {
        let data = Path::new("/home/me/.local/share/cinemu");
        let resolved = StorageBackend::default().resolve(data);
        assert_eq!(resolved, StorageBackend::JsonLines(data.join("moviecollection.jsonl")));

        let absolute = StorageBackend::Sqlite("/srv/movies.db".into()).resolve(data);
        assert_eq!(absolute, StorageBackend::Sqlite("/srv/movies.db".into()));
    }
}
