//! Loading and decoding the statistics file.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// A decoded statistics document: string keys to JSON values, in file order.
pub type Stats = Map<String, Value>;

/// User-visible failures of the loading glue.
///
/// Rendering itself cannot fail; these two variants are the whole error
/// surface of the tool.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The statistics file is missing or unreadable.
    #[error("file '{path}' not found: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid JSON object.
    #[error("invalid JSON format: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// Read and decode a statistics file.
///
/// Decodes directly into a [`Stats`] map, so a top-level array or bare
/// scalar is reported as invalid JSON rather than crashing downstream.
pub fn load_stats(path: &Path) -> Result<Stats, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json { source })
}
