//! Longitudinal strip of paired left/right vertices and normals.
//!
//! The strip is built flat, tilted about the longitudinal pivot, then lifted
//! by elevation. Elevation always uses the original division fraction, never
//! a tilt-adjusted one, so the step order is fixed.

use config::constants::GeneratorConfig;

use crate::vec3::{tilt_around_z, Vec3};

/// Fractional positions along the segment length.
///
/// Returns `resolution + 1` evenly spaced values over `[0, 1]`.
///
/// # Examples
/// ```
/// use track_mesh::strip::division_points;
/// assert_eq!(division_points(2), vec![0.0, 0.5, 1.0]);
/// ```
pub fn division_points(resolution: u32) -> Vec<f64> {
    (0..=resolution)
        .map(|i| f64::from(i) / f64::from(resolution))
        .collect()
}

/// Paired left/right vertex and normal runs along one segment.
///
/// Both sides always hold `resolution + 1` entries. The division fraction at
/// each index is kept alongside the geometry so elevation can read the
/// original, un-tilted value.
#[derive(Debug, Clone)]
pub struct SurfaceStrip {
    points: Vec<f64>,
    left_vertices: Vec<Vec3>,
    right_vertices: Vec<Vec3>,
    left_normals: Vec<Vec3>,
    right_normals: Vec<Vec3>,
}

impl SurfaceStrip {
    /// Builds the flat base strip.
    ///
    /// Left vertices run along x = 0, right vertices along x = width; both
    /// advance down z by `width * p`. All normals start pointing up.
    pub fn base(config: &GeneratorConfig) -> Self {
        let points = division_points(config.resolution);
        let width = config.segment_width;

        let left_vertices = points
            .iter()
            .map(|p| Vec3::new(0.0, 0.0, width * p))
            .collect();
        let right_vertices = points
            .iter()
            .map(|p| Vec3::new(width, 0.0, width * p))
            .collect();
        let left_normals = vec![Vec3::Y; points.len()];
        let right_normals = vec![Vec3::Y; points.len()];

        Self {
            points,
            left_vertices,
            right_vertices,
            left_normals,
            right_normals,
        }
    }

    /// Tilts the cross-section, interpolating linearly from start to end.
    ///
    /// Vertices rotate about the longitudinal pivot at half the segment
    /// width; normals rotate about the origin so they turn in place.
    pub fn apply_tilt(&mut self, tilt_start: f64, tilt_end: f64, segment_width: f64) {
        let vertex_pivot = Vec3::new(segment_width / 2.0, 0.0, 0.0);
        let last = (self.points.len() - 1) as f64;

        for index in 0..self.points.len() {
            let angle = tilt_start + (tilt_end - tilt_start) * index as f64 / last;
            self.left_vertices[index] = tilt_around_z(self.left_vertices[index], angle, vertex_pivot);
            self.right_vertices[index] =
                tilt_around_z(self.right_vertices[index], angle, vertex_pivot);
            self.left_normals[index] = tilt_around_z(self.left_normals[index], angle, Vec3::ZERO);
            self.right_normals[index] = tilt_around_z(self.right_normals[index], angle, Vec3::ZERO);
        }
    }

    /// Lifts both rails by `height * p * elevation` at each division point.
    ///
    /// Runs strictly after tilt and reads the stored division fractions.
    pub fn apply_elevation(&mut self, elevation: f64, segment_height: f64) {
        for (index, point) in self.points.iter().enumerate() {
            let lift = segment_height * point * elevation;
            self.left_vertices[index].y += lift;
            self.right_vertices[index].y += lift;
        }
    }

    /// Entries per side, always `resolution + 1`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A strip is never empty; present to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Left-rail vertices, by increasing division point.
    pub fn left_vertices(&self) -> &[Vec3] {
        &self.left_vertices
    }

    /// Right-rail vertices, by increasing division point.
    pub fn right_vertices(&self) -> &[Vec3] {
        &self.right_vertices
    }

    /// Left-rail normals, parallel to the left vertices.
    pub fn left_normals(&self) -> &[Vec3] {
        &self.left_normals
    }

    /// Right-rail normals, parallel to the right vertices.
    pub fn right_normals(&self) -> &[Vec3] {
        &self.right_normals
    }
}
