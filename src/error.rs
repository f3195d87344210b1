//! Error types for wordlist splitting
//!
//! Per-line decode failures never show up here: the loader counts and skips
//! them. Everything in [`SplitError`] ends the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// The wordlist to load does not exist
    #[error("Wordlist not found: {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The wordlist path names a directory
    #[error("Wordlist is not a regular file: {0:?}")]
    InputNotAFile(PathBuf),

    /// Chunk size answer could not be parsed as a non-negative integer
    #[error("Invalid chunk size: '{0}'")]
    InvalidChunkSize(String),

    /// Output directory is missing or is not a directory
    #[error("Output directory does not exist: {0:?}")]
    OutputDir(PathBuf),

    /// Failed to write a chunk file
    #[error("Failed to write chunk file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
