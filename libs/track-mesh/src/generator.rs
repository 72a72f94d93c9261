//! # Segment Mesh Generator
//!
//! Builds the road-surface mesh for one prefab: base strip, tilt, elevation,
//! then quad-strip triangulation.

use config::constants::GeneratorConfig;
use track_prefab::{Prefab, SegmentKind};

use crate::error::MeshError;
use crate::faces::quad_strip_faces;
use crate::mesh::Mesh;
use crate::strip::SurfaceStrip;

/// Builds the mesh for one prefab.
///
/// Straight segments produce a tilted, elevated quad strip. Curve prefabs
/// have no generator and are rejected with an explicit error.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// use track_mesh::generator::build_segment;
/// use track_prefab::Prefab;
///
/// let prefab: Prefab = serde_json::from_str(
///     r#"{"type": "straight", "elevation": 0, "tilt_start": 0,
///         "tilt_end": 0, "slope_start": 0, "slope_end": 0}"#,
/// ).unwrap();
/// let cfg = GeneratorConfig::new(4.0, 1.0, 2).unwrap();
///
/// let mesh = build_segment(&prefab, &cfg).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// ```
pub fn build_segment(prefab: &Prefab, config: &GeneratorConfig) -> Result<Mesh, MeshError> {
    match prefab.kind {
        SegmentKind::Straight => Ok(build_straight(prefab, config)),
        SegmentKind::Curve => Err(MeshError::UnsupportedSegment { kind: prefab.kind }),
    }
}

/// Assembles the straight-segment mesh.
///
/// Vertex order is fixed: the whole left rail by increasing division point,
/// then the whole right rail; normals follow the same order. The face list
/// from `quad_strip_faces` addresses exactly this layout.
fn build_straight(prefab: &Prefab, config: &GeneratorConfig) -> Mesh {
    let mut strip = SurfaceStrip::base(config);

    if prefab.tilt_start != 0.0 || prefab.tilt_end != 0.0 {
        strip.apply_tilt(prefab.tilt_start, prefab.tilt_end, config.segment_width);
    }
    strip.apply_elevation(prefab.elevation, config.segment_height);

    let mut mesh = Mesh::with_capacity(2 * strip.len(), 2 * config.resolution as usize);
    for (vertex, normal) in strip.left_vertices().iter().zip(strip.left_normals()) {
        mesh.add_vertex(*vertex, *normal);
    }
    for (vertex, normal) in strip.right_vertices().iter().zip(strip.right_normals()) {
        mesh.add_vertex(*vertex, *normal);
    }
    for face in quad_strip_faces(config.resolution) {
        mesh.add_face(face);
    }

    mesh
}
