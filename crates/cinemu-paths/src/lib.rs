//! Crate `cinemu_paths`: directory layout and single-instance lock for Cinemu.

mod errors;
mod fs_utils;
mod paths;

pub use errors::Error;
pub use fs_utils::ensure_parent;
pub use paths::{CinemuPaths, ENV_BASE_DIR};
