use cinemu_core::{AdvancedSearch, Collection, CollectionError, MovieDraft, MovieRecord, Query, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, instrument, warn};

use crate::{error::StorageError, traits::Storage};

/// What to do when a new movie's title is already in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    Allow,
    #[default]
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { index: usize },
    SkippedDuplicate,
}

/// The one catalog of a run, bound to the storage it came from.
///
/// All reads and writes go through this value; nothing else holds the
/// collection.
#[derive(Debug)]
pub struct Session<St: Storage> {
    storage: St,
    movies: Collection,
}

impl<St: Storage> Session<St> {
    /// Loads the stored catalog. A load error is handed back next to a
    /// session holding every movie decoded before it.
    #[instrument(level = Level::DEBUG, skip_all)]
    pub fn open(storage: St) -> (Self, Option<StorageError>) {
        let outcome = storage.load();
        if let Some(e) = &outcome.error {
            warn!(recovered = outcome.movies.len(), "Collection could not be fully loaded: {e}");
        }
        info!("Session opened with {} movies", outcome.movies.len());

        let session = Session {
            storage,
            movies: outcome.movies.into(),
        };
        (session, outcome.error)
    }

    pub fn collection(&self) -> &Collection {
        &self.movies
    }

    pub fn query(&self) -> Query<'_> {
        self.movies.query()
    }

    pub fn storage(&self) -> &St {
        &self.storage
    }

    pub fn is_duplicate(&self, title: &str) -> bool {
        self.movies.contains_title(title)
    }

    /// Validates `draft` and appends it, unless the title is taken and
    /// `policy` says to skip.
    pub fn add(&mut self, draft: MovieDraft, policy: DuplicatePolicy) -> Result<AddOutcome, ValidationError> {
        let movie = draft.validate().inspect_err(|e| info!("Movie not added: {e}"))?;

        if policy == DuplicatePolicy::Skip && self.is_duplicate(&movie.title) {
            info!("Skipped duplicate title {:?}", movie.title);
            return Ok(AddOutcome::SkippedDuplicate);
        }

        debug!("ADDED: {movie}");
        self.movies.add(movie);
        Ok(AddOutcome::Added {
            index: self.movies.len() - 1,
        })
    }

    pub fn remove_at(&mut self, index: usize) -> Result<MovieRecord, CollectionError> {
        let removed = self.movies.remove_at(index)?;
        debug!("DELETED: {removed}");
        Ok(removed)
    }

    pub fn search(&self, search: &AdvancedSearch) -> Collection {
        search.run(&self.movies)
    }

    /// Writes the catalog. Failures are returned as is; nothing is retried.
    pub fn save(&self) -> Result<(), StorageError> {
        self.storage.save(self.movies.all())
    }

    /// Saves and ends the session.
    pub fn close(self) -> Result<(), StorageError> {
        let result = self.save();
        match &result {
            Ok(()) => info!("Session closed"),
            Err(e) => warn!("Collection could not be saved: {e}"),
        }
        result
    }
}
