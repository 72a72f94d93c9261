//! # Mesh Data Structure
//!
//! Road-surface mesh with paired vertex/normal lists and 1-based faces.

use crate::vec3::Vec3;

/// A triangle mesh where every vertex owns exactly one normal.
///
/// Face records hold **1-based** indices, matching the OBJ text the mesh is
/// serialized into: index `i` addresses both `vertices[i - 1]` and
/// `normals[i - 1]`.
///
/// # Example
///
/// ```rust
/// use track_mesh::{Mesh, Vec3};
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::Y);
/// let b = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::Y);
/// let c = mesh.add_vertex(Vec3::new(0.0, 0.0, 1.0), Vec3::Y);
/// mesh.add_face([a, b, c]);
/// assert_eq!(a, 1); // indices are 1-based
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions, left strip first, then right strip.
    vertices: Vec<Vec3>,
    /// One normal per vertex, same ordering.
    normals: Vec<Vec3>,
    /// Triangles as 1-based vertex/normal index triples.
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Adds a vertex with its normal and returns the 1-based index faces use.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.vertices.push(position);
        self.normals.push(normal);
        self.vertices.len() as u32
    }

    /// Adds a triangle of 1-based vertex/normal indices.
    pub fn add_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every vertex owns exactly one normal
    /// - Every face index lies in `[1, vertex_count]`
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;
        for face in &self.faces {
            if face.iter().any(|&i| i == 0 || i > vertex_count) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.normal_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_add_vertex_is_one_based() {
        let mut mesh = Mesh::new();
        let first = mesh.add_vertex(Vec3::ZERO, Vec3::Y);
        let second = mesh.add_vertex(Vec3::X, Vec3::Y);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.normal_count(), 2);
    }

    #[test]
    fn test_validate_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Y);
        mesh.add_vertex(Vec3::X, Vec3::Y);
        mesh.add_vertex(Vec3::Z, Vec3::Y);
        mesh.add_face([1, 2, 3]);
        assert!(mesh.validate());
    }

    #[test]
    fn test_validate_rejects_zero_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Y);
        mesh.add_face([0, 1, 1]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Y);
        mesh.add_face([1, 1, 2]);
        assert!(!mesh.validate());
    }
}
