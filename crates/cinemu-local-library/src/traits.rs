use cinemu_core::MovieRecord;

use crate::error::StorageError;

/// Result of reading a catalog back. Decoding stops at the first bad
/// record; `movies` holds everything read before it.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub movies: Vec<MovieRecord>,
    pub error: Option<StorageError>,
}

impl LoadOutcome {
    pub fn complete(movies: Vec<MovieRecord>) -> Self {
        LoadOutcome { movies, error: None }
    }

    pub fn partial(movies: Vec<MovieRecord>, error: StorageError) -> Self {
        LoadOutcome {
            movies,
            error: Some(error),
        }
    }
}

/// Durable home of a catalog. Read once when a session opens, written
/// when it closes.
pub trait Storage {
    fn load(&self) -> LoadOutcome;

    /// Replaces the stored catalog with `movies`, in order.
    fn save(&self, movies: &[MovieRecord]) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self) -> LoadOutcome {
        (**self).load()
    }

    fn save(&self, movies: &[MovieRecord]) -> Result<(), StorageError> {
        (**self).save(movies)
    }
}
