//! OBJ text export for segment meshes.
//!
//! The output keeps a fixed block order: every vertex line, then every
//! normal line, then every face line.
//!
//! ```text
//! v x y z
//! vn nx ny nz
//! f v1//n1 v2//n2 v3//n3
//! ```
//!
//! Face corners reference a vertex and a normal by the same 1-based index;
//! the mesh stores them paired, so both numbers are always equal.

use std::io::Write;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Serializes the mesh into OBJ text.
///
/// # Examples
/// ```
/// use track_mesh::{obj_string, Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::Y);
/// let b = mesh.add_vertex(Vec3::new(4.0, 0.0, 0.0), Vec3::Y);
/// let c = mesh.add_vertex(Vec3::new(0.0, 0.0, 4.0), Vec3::Y);
/// mesh.add_face([a, b, c]);
///
/// let text = obj_string(&mesh);
/// assert!(text.starts_with("v 0 0 0\n"));
/// assert!(text.ends_with("f 1//1 2//2 3//3\n"));
/// ```
pub fn obj_string(mesh: &Mesh) -> String {
    let mut out = String::new();

    for vertex in mesh.vertices() {
        out.push_str(&format!("v {} {} {}\n", vertex.x, vertex.y, vertex.z));
    }
    for normal in mesh.normals() {
        out.push_str(&format!("vn {} {} {}\n", normal.x, normal.y, normal.z));
    }
    for face in mesh.faces() {
        out.push_str(&format!(
            "f {0}//{0} {1}//{1} {2}//{2}\n",
            face[0], face[1], face[2]
        ));
    }

    out
}

/// Writes the mesh as OBJ text to `writer`.
///
/// Failures propagate; nothing is retried or cleaned up beyond dropping the
/// writer.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), MeshError> {
    writer.write_all(obj_string(mesh).as_bytes())?;
    Ok(())
}
