//! Thin wrapper around `glam::DVec3` shared across mesh modules.
//!
//! The tilt helper keeps the rotation convention in one place while avoiding
//! direct dependencies on `glam` from higher layers.

pub use glam::DVec3 as Vec3;

/// Rotates `v` in the (x, y) plane around a pivot, leaving z untouched.
///
/// The angle is given in degrees. The vector is translated so the pivot's x
/// and y components land on the origin, rotated with the standard 2D rotation
/// matrix, then translated back. Callers rotating normals pass a pivot at the
/// origin so the normal turns without being displaced.
///
/// Returns a new vector; the input is never mutated.
///
/// # Examples
/// ```
/// use track_mesh::vec3::{tilt_around_z, Vec3};
///
/// let v = Vec3::new(4.0, 0.0, 1.0);
/// let turned = tilt_around_z(v, 90.0, Vec3::new(2.0, 0.0, 0.0));
/// assert!((turned.x - 2.0).abs() < 1e-12);
/// assert!((turned.y - 2.0).abs() < 1e-12);
/// assert_eq!(turned.z, 1.0);
/// ```
pub fn tilt_around_z(v: Vec3, angle_degrees: f64, pivot: Vec3) -> Vec3 {
    let angle_radians = angle_degrees.to_radians();
    let (sine, cosine) = angle_radians.sin_cos();

    let dx = v.x - pivot.x;
    let dy = v.y - pivot.y;

    Vec3::new(
        dx * cosine - dy * sine + pivot.x,
        dx * sine + dy * cosine + pivot.y,
        v.z,
    )
}
