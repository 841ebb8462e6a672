use std::{env, fs::File, path::PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::{errors::Error, fs_utils};

/// Overrides the base directory, for portable installs and tests.
pub const ENV_BASE_DIR: &str = "CINEMU_BASE_DIR";

/// Every directory and file the catalog reads or writes.
#[derive(Debug, Clone)]
pub struct CinemuPaths {
    // config_dir
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,

    // data_dir
    pub data_dir: PathBuf,
    pub collection_file: PathBuf,
    pub collection_db: PathBuf,

    pub lock_file: PathBuf,
}

impl CinemuPaths {
    pub fn new() -> Result<Self, Error> {
        if let Ok(base) = env::var(ENV_BASE_DIR) {
            return Self::with_base(base);
        }

        let proj = ProjectDirs::from("org", "Cinemu", "Cinemu").ok_or(Error::NoHome)?;
        Self::from_dirs(proj.config_dir().to_path_buf(), proj.data_dir().to_path_buf())
    }

    /// Portable layout: `config/` and `data/` under `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Result<Self, Error> {
        let b = base.into();
        Self::from_dirs(b.join("config"), b.join("data"))
    }

    fn from_dirs(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, Error> {
        let paths = CinemuPaths {
            config_dir: config_dir.clone(),
            settings_file: config_dir.join("settings.toml"),

            data_dir: data_dir.clone(),
            collection_file: data_dir.join("moviecollection.jsonl"),
            collection_db: data_dir.join("moviecollection.db"),

            lock_file: data_dir.join("cinemu.lock"),
        };

        paths.ensure_structure()?;
        paths.validate_structure()?;

        debug!(data_dir = %paths.data_dir.display(), "paths ready");
        Ok(paths)
    }

    /// True until the first session has taken the lock.
    pub fn is_first_run(&self) -> bool {
        !self.lock_file.exists()
    }

    /// Takes the single-instance lock. Keep the returned `File` alive to hold it.
    pub fn lock(&self) -> Result<File, Error> {
        fs_utils::lock_file(&self.lock_file)
    }
}

impl CinemuPaths {
    /// Creates every directory the catalog expects.
    ///
    /// Data files are left alone: a missing collection file is an empty catalog.
    pub fn ensure_structure(&self) -> Result<(), Error> {
        fs_utils::ensure_dir(&self.config_dir)?;
        fs_utils::ensure_dir(&self.data_dir)?;
        Ok(())
    }

    /// Recreates missing directories and checks each one is writable.
    pub fn validate_structure(&self) -> Result<(), Error> {
        for dir in [&self.config_dir, &self.data_dir] {
            if !dir.exists() {
                fs_utils::ensure_dir(dir)?;
            }
            fs_utils::check_writable(dir)?;
        }
        Ok(())
    }
}
