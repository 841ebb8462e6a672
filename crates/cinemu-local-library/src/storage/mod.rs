mod embedded;
mod json_lines;
mod sqlite;

use tracing::{Level, instrument};

pub use json_lines::JsonLinesStorage;
pub use sqlite::SqliteStorage;

use crate::{error::StorageError, library_config::StorageBackend, traits::Storage};

/// Opens the backend named by the configuration.
#[instrument(level = Level::DEBUG, err)]
pub fn open(backend: &StorageBackend) -> Result<Box<dyn Storage>, StorageError> {
    Ok(match backend {
        StorageBackend::JsonLines(path) => Box::new(JsonLinesStorage::new(path)),
        StorageBackend::Sqlite(path) => Box::new(SqliteStorage::open(path)?),
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use cinemu_core::{Genre, MovieRecord, Rating};

    pub fn movies() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new(
                "Titanic",
                "James Cameron",
                Genre::Drama,
                1997,
                Rating::One,
                ["Leonardo DiCaprio", "Kate Winslet", "Billy Zane"],
            ),
            MovieRecord::new(
                "Avatar",
                "James Cameron",
                Genre::Fantasy,
                2009,
                Rating::Two,
                ["Sam Worthington", "Zoe Saldana", "Sigourney Weaver"],
            ),
            MovieRecord::new("Blade Runner", "Ridley Scott", Genre::SciFi, 1982, Rating::Five, ["Harrison Ford"]),
            MovieRecord::new("Titanic", "Jean Negulesco", Genre::Historical, 1953, Rating::Three, [
                "Clifton Webb, Jr.",
            ]),
        ]
    }
}
