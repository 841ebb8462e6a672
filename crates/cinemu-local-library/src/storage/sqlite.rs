use std::path::{Path, PathBuf};

use cinemu_core::MovieRecord;
use rusqlite::{Connection, params};
use tracing::{Level, debug, info, instrument, trace};

use super::embedded::migrations::runner;
use crate::{
    error::StorageError,
    traits::{LoadOutcome, Storage},
};

/// Raw column values of one `movies` row, before the enum and cast columns
/// are decoded.
struct MovieRow {
    position: i64,
    title: String,
    director: String,
    genre: String,
    release_year: i32,
    rating: String,
    cast_json: String,
}

impl MovieRow {
    fn decode(self) -> Result<MovieRecord, StorageError> {
        let position = self.position;
        let invalid = |reason: String| StorageError::Decode { position, reason };

        Ok(MovieRecord {
            genre: self.genre.parse().map_err(|e| invalid(format!("{e}")))?,
            rating: self.rating.parse().map_err(|e| invalid(format!("{e}")))?,
            cast: serde_json::from_str(&self.cast_json).map_err(|e| invalid(format!("cast: {e}")))?,
            title: self.title,
            director: self.director,
            release_year: self.release_year,
        })
    }
}

/// Catalog kept in a single SQLite table, one row per movie, ordered by
/// the `position` column.
#[derive(Debug)]
pub struct SqliteStorage {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        cinemu_paths::ensure_parent(path)?;

        info!("Opening collection database at {}", path.display());
        let mut conn = Connection::open(path)?;
        Self::initialize_connection(&mut conn)?;

        Ok(SqliteStorage {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Private database, used by tests.
    pub fn in_memory() -> Result<Self, StorageError> {
        let mut conn = Connection::open_in_memory()?;
        Self::initialize_connection(&mut conn)?;
        Ok(SqliteStorage {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn initialize_connection(conn: &mut Connection) -> Result<(), StorageError> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 5000)?;

        let report = runner().run(conn)?;
        for migration in report.applied_migrations() {
            trace!("Applied migration: {migration}");
        }
        Ok(())
    }

    fn read_rows(&self, movies: &mut Vec<MovieRecord>) -> Result<(), StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT position, title, director, genre, release_year, rating, cast_json
               FROM movies
              ORDER BY position",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MovieRow {
                position: row.get(0)?,
                title: row.get(1)?,
                director: row.get(2)?,
                genre: row.get(3)?,
                release_year: row.get(4)?,
                rating: row.get(5)?,
                cast_json: row.get(6)?,
            })
        })?;

        for row in rows {
            let movie = row?.decode()?;
            debug!("IMPORTED: {movie}");
            movies.push(movie);
        }
        Ok(())
    }
}

impl Storage for SqliteStorage {
    #[instrument(level = Level::DEBUG, skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> LoadOutcome {
        let mut movies = Vec::new();
        match self.read_rows(&mut movies) {
            Ok(()) => {
                info!("{} movies loaded", movies.len());
                LoadOutcome::complete(movies)
            }
            Err(e) => LoadOutcome::partial(movies, e),
        }
    }

    /// Replaces every row in one transaction.
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %self.path.display(), count = movies.len()), err)]
    fn save(&self, movies: &[MovieRecord]) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM movies", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO movies (position, title, director, genre, release_year, rating, cast_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (position, movie) in movies.iter().enumerate() {
                let cast_json = serde_json::to_string(&movie.cast).map_err(StorageError::Encode)?;
                insert.execute(params![
                    position as i64,
                    movie.title,
                    movie.director,
                    movie.genre.as_str(),
                    movie.release_year,
                    movie.rating.as_str(),
                    cast_json,
                ])?;
            }
        }
        tx.commit()?;

        info!("EXPORTED: {} movies saved to {}", movies.len(), self.path.display());
        Ok(())
    }
}
