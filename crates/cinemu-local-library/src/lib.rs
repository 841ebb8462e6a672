//! On-disk side of the catalog: settings, storage backends and the
//! session that ties a collection to its storage.

pub mod config_manager;
pub mod error;
pub mod library_config;
pub mod session;
pub mod storage;
pub mod traits;

pub use config_manager::ConfigManager;
pub use error::{ConfigError, StorageError};
pub use library_config::{LibraryConfig, LibraryConfigBuilder, StorageBackend};
pub use session::{AddOutcome, DuplicatePolicy, Session};
pub use traits::{LoadOutcome, Storage};
