use fs2::FileExt;
use std::{fs, fs::OpenOptions, io, path::Path};

use tracing::{Level, instrument};

use crate::errors::Error;

/// Creates `path` and any missing parents.
#[instrument(level = Level::TRACE, err)]
pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Creates the parent directory of `path` if it is missing.
#[instrument(level = Level::TRACE, err)]
pub fn ensure_parent(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Takes an exclusive lock on `path` without blocking.
///
/// The lock lives as long as the returned `File`.
#[instrument(level = Level::TRACE, err)]
pub fn lock_file(path: &Path) -> Result<fs::File, Error> {
    ensure_parent(path)?;
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(file),
        Err(e) if e.kind() == fs2::lock_contended_error().kind() => Err(Error::Locked(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// Fails unless the owner may write to `path`.
#[instrument(level = Level::TRACE, err)]
pub fn check_writable(path: &Path) -> Result<(), Error> {
    let meta = fs::metadata(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o200 == 0 {
            return Err(not_writable(path));
        }
    }

    // No owner bit on Windows: try to create a file instead.
    #[cfg(windows)]
    {
        let marker = path.join(".cinemu-write-check");
        if meta.permissions().readonly() || fs::write(&marker, b"").is_err() {
            return Err(not_writable(path));
        }
        let _ = fs::remove_file(&marker);
    }

    #[cfg(not(any(unix, windows)))]
    if meta.permissions().readonly() {
        return Err(not_writable(path));
    }

    Ok(())
}

fn not_writable(path: &Path) -> Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("No write permission for {}", path.display()),
    )
    .into()
}
