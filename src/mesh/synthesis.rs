//! Voxel set to flat mesh conversion

use crate::mesh::flat::{FlatMesh, FlatMeshBuilder};
use crate::voxel::set::VoxelSet;
use crate::voxel::topology::{CUBE_CORNERS, FACE_DIRECTIONS, FACE_TRIANGLES};

/// Rebuild `mesh` from the voxel set.
///
/// A face is emitted only when the neighboring cell along its normal is
/// empty; faces between two solid voxels are culled. Every emitted
/// triangle's vertices are `(index + corner) * scale` and all three
/// carry the voxel's stored color for that face, so the output has no
/// shared vertices at all.
///
/// The mesh is replaced wholesale and its version bumped, even when the
/// voxel set has not changed since the last call. Two consecutive calls
/// therefore produce byte-identical buffers.
pub fn synthesize_into(voxels: &VoxelSet, scale: f32, mesh: &mut FlatMesh) {
    let mut builder = FlatMeshBuilder::with_capacity(voxels.len() * 4);

    for (i, &index) in voxels.indices().iter().enumerate() {
        for (d, &direction) in FACE_DIRECTIONS.iter().enumerate() {
            if voxels.contains(index + direction) {
                continue;
            }

            let color = voxels.face_color(i, d);
            let base = index.as_vec3();
            let triangles = &FACE_TRIANGLES[d];

            let mut t = 0;
            while triangles[t] != -1 {
                let v0 = (base + CUBE_CORNERS[triangles[t] as usize]) * scale;
                let v1 = (base + CUBE_CORNERS[triangles[t + 1] as usize]) * scale;
                let v2 = (base + CUBE_CORNERS[triangles[t + 2] as usize]) * scale;
                builder.triangle(v0, v1, v2, color, color, color);
                t += 3;
            }
        }
    }

    log::debug!(
        "synthesized {} triangles from {} voxels",
        builder.triangle_count(),
        voxels.len()
    );
    builder.overwrite(mesh);
}
