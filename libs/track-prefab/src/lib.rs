//! # Track Prefab
//!
//! Prefab record model and input queue for the track mesh pipeline.
//!
//! ## Architecture
//!
//! ```text
//! prefab JSON → track-prefab (Prefab records) → track-mesh (Mesh)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use track_prefab::PrefabQueue;
//!
//! let json = r#"[{"type": "straight", "elevation": 0, "tilt_start": 0,
//!                 "tilt_end": 0, "slope_start": 0, "slope_end": 0}]"#;
//! let mut queue = PrefabQueue::from_json(json).unwrap();
//! let prefab = queue.next_prefab().unwrap();
//! assert_eq!(prefab.name(), "straight_elevation0_tilt0-0_slope0-0");
//! ```

pub mod error;
pub mod prefab;
pub mod queue;

// Re-export public API
pub use error::PrefabError;
pub use prefab::{Prefab, SegmentKind};
pub use queue::PrefabQueue;
