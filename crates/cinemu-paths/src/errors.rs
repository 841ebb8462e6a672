use std::{io, path::PathBuf};

/// Errors raised while resolving or preparing the catalog's directories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The platform did not report a usable home directory.
    #[error(
        "Could not determine the project directory, the call to ProjectDirs failed, \
         the system probably does not provide a valid $HOME path."
    )]
    NoHome,

    /// Another process already holds the catalog lock.
    #[error("The catalog at {} is already open in another process.", .0.display())]
    Locked(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
