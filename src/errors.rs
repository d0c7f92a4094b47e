use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration, read, and write failures.
///
/// No partial recovery is attempted: any file-level failure aborts the run,
/// and a partially written output directory may remain on disk.
#[derive(Debug, Error)]
pub enum QuantizeError {
    #[error("failed to read '{path}': {source}")]
    FileRead { path: PathBuf, source: io::Error },
    #[error("failed to write '{path}': {source}")]
    FileWrite { path: PathBuf, source: io::Error },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
