use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] config::ConfigError),

    #[error(transparent)]
    Paths(#[from] cinemu_paths::Error),
}

/// Failures of the persistence layer. Loads report them next to whatever
/// was decoded before the failure; saves return them as is.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} of the collection file is not a valid movie: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode movie: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] refinery::Error),

    #[error("Row {position} of the collection table is not a valid movie: {reason}")]
    Decode { position: i64, reason: String },

    #[error(transparent)]
    Paths(#[from] cinemu_paths::Error),
}
