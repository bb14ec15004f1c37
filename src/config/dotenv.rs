//! `.env` file loading.
//!
//! Primes the environment before resolution. Variables that are already set
//! are never overridden, and a missing file is not an error.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ConfigError;

/// Load `.env` from the current directory or one of its parents into the
/// process environment.
///
/// Returns the loaded path, or `None` when no file was found.
pub fn load() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load a specific env file into the process environment.
pub fn load_from(path: impl AsRef<Path>) -> Result<Option<PathBuf>, ConfigError> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Parse an env file without touching the process environment.
///
/// Feed the result to [`super::Env::merge_missing`] to apply it to a snapshot.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, ConfigError> {
    let iter = dotenvy::from_path_iter(path.as_ref())?;

    let mut vars = Vec::new();
    for item in iter {
        vars.push(item?);
    }

    Ok(vars)
}
