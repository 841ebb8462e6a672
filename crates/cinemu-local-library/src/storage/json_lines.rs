use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use cinemu_core::MovieRecord;
use tempfile::NamedTempFile;
use tracing::{Level, debug, info, instrument};

use crate::{
    error::StorageError,
    traits::{LoadOutcome, Storage},
};

/// One JSON object per line, in collection order.
///
/// Genre and rating are stored by symbolic name, the cast as an array.
#[derive(Debug, Clone)]
pub struct JsonLinesStorage {
    path: PathBuf,
}

impl JsonLinesStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonLinesStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonLinesStorage {
    #[instrument(level = Level::DEBUG, skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> LoadOutcome {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No collection file yet, starting with an empty catalog");
                return LoadOutcome::default();
            }
            Err(e) => return LoadOutcome::partial(Vec::new(), e.into()),
        };

        let mut movies = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return LoadOutcome::partial(movies, e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<MovieRecord>(&line) {
                Ok(movie) => {
                    debug!("IMPORTED: {movie}");
                    movies.push(movie);
                }
                Err(source) => {
                    let error = StorageError::Json {
                        line: index + 1,
                        source,
                    };
                    return LoadOutcome::partial(movies, error);
                }
            }
        }

        info!("{} movies loaded", movies.len());
        LoadOutcome::complete(movies)
    }

    /// Writes to a temp file next to the target and renames it over the
    /// target. On failure the previous catalog is left as it was and the
    /// temp file is removed.
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %self.path.display(), count = movies.len()), err)]
    fn save(&self, movies: &[MovieRecord]) -> Result<(), StorageError> {
        cinemu_paths::ensure_parent(&self.path)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut out = BufWriter::new(temp.as_file_mut());
            for movie in movies {
                serde_json::to_writer(&mut out, movie).map_err(StorageError::Encode)?;
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        info!("EXPORTED: {} movies saved to {}", movies.len(), self.path.display());
        Ok(())
    }
}
