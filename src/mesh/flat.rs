//! Flat (non-shared-vertex) triangle mesh resource
//!
//! Every triangle owns its three vertices, so each voxel face can carry
//! an independent color without bleeding into neighbors. The buffers are
//! rebuilt wholesale on every edit; hosts detect changes by comparing
//! [`FlatMesh::version`] values once per interaction tick.

use std::sync::atomic::{AtomicU64, Ordering};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;
use crate::voxel::color::FaceColor;

static MESH_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque mesh resource identifier.
///
/// Generated atomically; [`FlatMesh::adopt`] transfers it between
/// meshes. Asset stores use it to associate a mesh with its saved path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MeshId(u64);

impl MeshId {
    /// Generate a new unique MeshId
    pub fn new() -> Self {
        Self(MESH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for MeshId {
    fn default() -> Self {
        Self::new()
    }
}

/// Interleaved vertex for GPU upload - position, normal, rgba8 color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [u8; 4],
}

/// Flat triangle mesh with per-vertex normals and colors.
///
/// `positions`, `normals` and `colors` run in lockstep; `indices` is the
/// sequential triangle list `0..vertex_count` (no vertex sharing).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlatMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<FaceColor>,
    indices: Vec<u32>,
    #[serde(skip)]
    id: MeshId,
    #[serde(skip)]
    version: u64,
}

impl FlatMesh {
    /// Create an empty mesh resource at version 0
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            id: MeshId::new(),
            version: 0,
        }
    }

    pub fn id(&self) -> MeshId {
        self.id
    }

    /// Monotonically increasing revision counter, bumped on every
    /// overwrite. Compared by value to detect changes.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn colors(&self) -> &[FaceColor] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Interleave the buffers for GPU upload
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((p, n), c)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: c.to_bytes(),
            })
            .collect()
    }

    /// Adopt another mesh's buffers and identity, bumping this mesh's
    /// version.
    ///
    /// Taking over `other`'s id keeps any asset-store path registered
    /// for it pointing at this resource, so a later save writes back to
    /// the file the adopted mesh was loaded from.
    pub fn adopt(&mut self, other: &FlatMesh) {
        self.positions = other.positions.clone();
        self.normals = other.normals.clone();
        self.colors = other.colors.clone();
        self.indices = other.indices.clone();
        self.id = other.id;
        self.version += 1;
    }
}

impl Default for FlatMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates flat triangles, then overwrites a [`FlatMesh`] in one go.
///
/// The outward normal of each triangle is derived from its winding and
/// replicated to all three vertices.
#[derive(Debug, Default)]
pub struct FlatMeshBuilder {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<FaceColor>,
}

impl FlatMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with room for `triangles` triangles
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * 3),
            normals: Vec::with_capacity(triangles * 3),
            colors: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append one triangle with per-vertex colors
    pub fn triangle(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        c0: FaceColor,
        c1: FaceColor,
        c2: FaceColor,
    ) {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        self.positions.extend([v0, v1, v2]);
        self.normals.extend([normal; 3]);
        self.colors.extend([c0, c1, c2]);
    }

    /// Number of accumulated triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Replace the mesh buffers with the accumulated triangles and bump
    /// its version
    pub fn overwrite(self, mesh: &mut FlatMesh) {
        mesh.indices = (0..self.positions.len() as u32).collect();
        mesh.positions = self.positions;
        mesh.normals = self.normals;
        mesh.colors = self.colors;
        mesh.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normal_from_winding() {
        let mut builder = FlatMeshBuilder::new();
        builder.triangle(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            FaceColor::WHITE,
            FaceColor::WHITE,
            FaceColor::WHITE,
        );
        let mut mesh = FlatMesh::new();
        builder.overwrite(&mut mesh);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.normals()[0], Vec3::Z);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_overwrite_bumps_version() {
        let mut mesh = FlatMesh::new();
        assert_eq!(mesh.version(), 0);
        FlatMeshBuilder::new().overwrite(&mut mesh);
        assert_eq!(mesh.version(), 1);
        FlatMeshBuilder::new().overwrite(&mut mesh);
        assert_eq!(mesh.version(), 2);
    }

    #[test]
    fn test_mesh_ids_are_unique() {
        assert_ne!(FlatMesh::new().id(), FlatMesh::new().id());
    }

    #[test]
    fn test_interleaved_vertices() {
        let mut builder = FlatMeshBuilder::new();
        let red = FaceColor::rgb(255, 0, 0);
        builder.triangle(Vec3::ZERO, Vec3::X, Vec3::Y, red, red, red);
        let mut mesh = FlatMesh::new();
        builder.overwrite(&mut mesh);

        let vertices = mesh.vertices();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[1].color, [255, 0, 0, 255]);
        // Pod layout suitable for direct GPU upload.
        assert_eq!(std::mem::size_of::<MeshVertex>(), 28);
    }

    #[test]
    fn test_adopt_takes_buffers_and_identity() {
        let mut a = FlatMesh::new();
        let mut b = FlatMesh::new();
        let mut builder = FlatMeshBuilder::new();
        builder.triangle(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            FaceColor::WHITE,
            FaceColor::WHITE,
            FaceColor::WHITE,
        );
        builder.overwrite(&mut b);

        let version = a.version();
        a.adopt(&b);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.version(), version + 1);
        assert_eq!(a.vertex_count(), 3);
    }
}
