//! # Track Mesh
//!
//! Segment mesh generation for track prefabs. Converts prefab records from
//! `track-prefab` into road-surface meshes and serializes them as Wavefront
//! OBJ text.
//!
//! ## Architecture
//!
//! ```text
//! track-prefab (Prefab) → strip → tilt → elevation → faces → Mesh → OBJ
//! ```
//!
//! ## Example
//!
//! ```rust
//! use config::constants::GeneratorConfig;
//! use track_mesh::build_segment;
//! use track_prefab::Prefab;
//!
//! let prefab: Prefab = serde_json::from_str(
//!     r#"{"type": "straight", "elevation": 0, "tilt_start": 0,
//!         "tilt_end": 0, "slope_start": 0, "slope_end": 0}"#,
//! ).unwrap();
//! let cfg = GeneratorConfig::new(4.0, 1.0, 2).unwrap();
//!
//! let mesh = build_segment(&prefab, &cfg).unwrap();
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.face_count(), 4);
//! ```

pub mod error;
pub mod export;
pub mod faces;
pub mod generator;
pub mod mesh;
pub mod strip;
pub mod vec3;

// Re-export public API
pub use error::MeshError;
pub use export::{obj_string, write_obj};
pub use generator::build_segment;
pub use mesh::Mesh;
pub use vec3::Vec3;
