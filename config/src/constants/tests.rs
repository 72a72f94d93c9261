//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.segment_width > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GeneratorConfig::default();
    assert!(cfg.segment_width > 0.0);
    assert!(cfg.segment_height > 0.0);
    assert!(cfg.resolution >= 1);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// assert!(GeneratorConfig::new(0.0, 1.0, 8).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeneratorConfig::new(0.0, 1.0, 8).unwrap_err(),
        ConfigError::InvalidWidth(0.0)
    );
    assert_eq!(
        GeneratorConfig::new(4.0, -1.0, 8).unwrap_err(),
        ConfigError::InvalidHeight(-1.0)
    );
    assert_eq!(
        GeneratorConfig::new(4.0, 1.0, 0).unwrap_err(),
        ConfigError::InvalidResolution(0)
    );
}

/// The default snapshot mirrors the module constants exactly.
#[test]
fn default_matches_constants() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.segment_width, SEGMENT_WIDTH);
    assert_eq!(cfg.segment_height, SEGMENT_HEIGHT);
    assert_eq!(cfg.resolution, RESOLUTION);
}
