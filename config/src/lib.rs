//! # Config Crate
//!
//! Centralized configuration constants for the track prefab pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeneratorConfig, SEGMENT_WIDTH, RESOLUTION};
//!
//! let cfg = GeneratorConfig::default();
//! assert_eq!(cfg.segment_width, SEGMENT_WIDTH);
//! assert_eq!(cfg.resolution, RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Per Run**: One configuration snapshot covers every prefab
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
