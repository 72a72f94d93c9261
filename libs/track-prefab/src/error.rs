//! # Prefab Errors
//!
//! Error types for prefab list loading. A malformed element aborts the whole
//! load and identifies the offending array index; there is no partial-success
//! mode.

use thiserror::Error;

/// Errors that can occur while loading the prefab list.
#[derive(Debug, Error)]
pub enum PrefabError {
    /// The prefab list file could not be read.
    #[error("failed to read prefab list: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a JSON array.
    #[error("prefab list is not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),

    /// One element of the array does not describe a valid prefab.
    #[error("malformed prefab at index {index}: {source}")]
    Malformed {
        /// Zero-based position of the offending element.
        index: usize,
        /// Underlying deserialization failure.
        source: serde_json::Error,
    },

    /// A curve record lacks the direction tags its name requires.
    #[error("curve prefab at index {index} is missing forward/sideways direction tags")]
    IncompleteCurve {
        /// Zero-based position of the offending element.
        index: usize,
    },
}
