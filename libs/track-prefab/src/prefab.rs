//! Prefab records describing one track segment each.
//!
//! A record is read once, consumed to build one mesh, and discarded. The
//! slope fields are part of the naming contract but unused by the straight
//! generator.

use std::fmt;

use serde::Deserialize;

/// The shape family of a track segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Straight segment: a longitudinal quad strip.
    Straight,
    /// Curved segment: declared by the input contract, no generator exists.
    Curve,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Straight => write!(f, "straight"),
            SegmentKind::Curve => write!(f, "curve"),
        }
    }
}

/// A declarative description of one track segment's shape parameters.
///
/// # Examples
/// ```
/// use track_prefab::{Prefab, SegmentKind};
///
/// let prefab: Prefab = serde_json::from_str(
///     r#"{"type": "straight", "elevation": 1, "tilt_start": 0,
///         "tilt_end": 15, "slope_start": 0, "slope_end": 0}"#,
/// ).unwrap();
/// assert_eq!(prefab.kind, SegmentKind::Straight);
/// assert_eq!(prefab.tilt_end, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prefab {
    /// Segment shape family.
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// Elevation multiplier applied along the segment length.
    pub elevation: f64,
    /// Cross-section tilt at the segment start, in degrees.
    pub tilt_start: f64,
    /// Cross-section tilt at the segment end, in degrees.
    pub tilt_end: f64,
    /// Slope at the segment start. Part of the naming contract only.
    pub slope_start: f64,
    /// Slope at the segment end. Part of the naming contract only.
    pub slope_end: f64,
    /// Forward direction tag, curve segments only.
    #[serde(default)]
    pub forward: Option<String>,
    /// Sideways direction tag, curve segments only.
    #[serde(default)]
    pub sideways: Option<String>,
}

impl Prefab {
    /// Derives the deterministic mesh name from the record's fields.
    ///
    /// The name doubles as the output file stem, so distinct parameter
    /// combinations must map to distinct names. Collisions between records
    /// carrying identical parameters are a caller responsibility.
    ///
    /// # Examples
    /// ```
    /// use track_prefab::Prefab;
    ///
    /// let prefab: Prefab = serde_json::from_str(
    ///     r#"{"type": "straight", "elevation": 0, "tilt_start": 0,
    ///         "tilt_end": 0, "slope_start": 0, "slope_end": 0}"#,
    /// ).unwrap();
    /// assert_eq!(prefab.name(), "straight_elevation0_tilt0-0_slope0-0");
    /// ```
    pub fn name(&self) -> String {
        let mut name = format!(
            "{}_elevation{}_tilt{}-{}_slope{}-{}",
            self.kind,
            self.elevation,
            self.tilt_start,
            self.tilt_end,
            self.slope_start,
            self.slope_end
        );
        if self.kind == SegmentKind::Curve {
            // Direction tags are validated at load time; missing tags can
            // only appear on hand-built records.
            let forward = self.forward.as_deref().unwrap_or("");
            let sideways = self.sideways.as_deref().unwrap_or("");
            name.push_str(&format!("curve{forward}-{sideways}"));
        }
        name
    }

    /// Returns true when a curve record is missing its direction tags.
    pub fn is_missing_directions(&self) -> bool {
        self.kind == SegmentKind::Curve && (self.forward.is_none() || self.sideways.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(elevation: f64, tilts: (f64, f64), slopes: (f64, f64)) -> Prefab {
        Prefab {
            kind: SegmentKind::Straight,
            elevation,
            tilt_start: tilts.0,
            tilt_end: tilts.1,
            slope_start: slopes.0,
            slope_end: slopes.1,
            forward: None,
            sideways: None,
        }
    }

    /// Naming contract for the all-zero straight prefab.
    #[test]
    fn test_name_straight_all_zero() {
        let prefab = straight(0.0, (0.0, 0.0), (0.0, 0.0));
        assert_eq!(prefab.name(), "straight_elevation0_tilt0-0_slope0-0");
    }

    /// Fractional and negative parameters render through plain f64 display.
    #[test]
    fn test_name_straight_fractional() {
        let prefab = straight(1.5, (-15.0, 30.0), (0.0, 2.0));
        assert_eq!(prefab.name(), "straight_elevation1.5_tilt-15-30_slope0-2");
    }

    /// Curve prefabs append the direction suffix after the slope block.
    #[test]
    fn test_name_curve_suffix() {
        let prefab = Prefab {
            kind: SegmentKind::Curve,
            elevation: 1.0,
            tilt_start: 0.0,
            tilt_end: 0.0,
            slope_start: 0.0,
            slope_end: 0.0,
            forward: Some("left".to_string()),
            sideways: Some("up".to_string()),
        };
        assert_eq!(
            prefab.name(),
            "curve_elevation1_tilt0-0_slope0-0curveleft-up"
        );
    }

    /// Unknown segment type strings are rejected at parse time.
    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result: Result<Prefab, _> = serde_json::from_str(
            r#"{"type": "loop", "elevation": 0, "tilt_start": 0,
                "tilt_end": 0, "slope_start": 0, "slope_end": 0}"#,
        );
        assert!(result.is_err());
    }

    /// A record missing a required numeric field is rejected.
    #[test]
    fn test_missing_field_is_parse_error() {
        let result: Result<Prefab, _> = serde_json::from_str(
            r#"{"type": "straight", "elevation": 0}"#,
        );
        assert!(result.is_err());
    }

    /// Direction tags are optional for straight segments only.
    #[test]
    fn test_missing_directions() {
        let prefab = straight(0.0, (0.0, 0.0), (0.0, 0.0));
        assert!(!prefab.is_missing_directions());

        let curve = Prefab {
            kind: SegmentKind::Curve,
            forward: None,
            sideways: Some("up".to_string()),
            ..straight(0.0, (0.0, 0.0), (0.0, 0.0))
        };
        assert!(curve.is_missing_directions());
    }
}
