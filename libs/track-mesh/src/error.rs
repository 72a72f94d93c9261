//! # Mesh Errors
//!
//! Error types for segment mesh generation and serialization.
//!
//! ## Error Policy
//!
//! - No fallback mechanisms when operations fail
//! - Unknown work is rejected loudly, never skipped

use thiserror::Error;
use track_prefab::SegmentKind;

/// Errors that can occur while building or writing a segment mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The segment kind has no generator.
    ///
    /// Curve prefabs are declared by the input contract but no curve
    /// algorithm exists; they are rejected instead of silently skipped.
    #[error("no mesh generator for {kind} segments")]
    UnsupportedSegment {
        /// The rejected segment kind.
        kind: SegmentKind,
    },

    /// Writing the serialized mesh failed.
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}
