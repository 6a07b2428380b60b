//! Flat mesh to voxel set reconstruction
//!
//! The inverse of [`synthesis`](crate::mesh::synthesis): given a flat
//! mesh whose vertices are grouped in 6-vertex face blocks (one quad as
//! two triangles), infer each block's voxel grid index, face direction
//! and color from its geometry, then recover interior voxels that were
//! fully culled away by inverting the face-culling rule.

use std::collections::{HashMap, HashSet};

use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::math::GridBounds;
use crate::mesh::flat::FlatMesh;
use crate::voxel::color::FaceColor;
use crate::voxel::set::VoxelSet;
use crate::voxel::topology::{self, POSITIVE_DIRECTIONS};

/// Vertices per emitted face: one quad split into two triangles
pub const FACE_VERTEX_COUNT: usize = 6;

/// Result of decoding a mesh back into voxels
#[derive(Clone, Debug)]
pub struct Reconstruction {
    pub voxels: VoxelSet,
    /// Inferred voxel edge length: the smallest face edge observed
    /// across all blocks, seeded with the caller's current scale
    pub scale: f32,
}

/// Rebuild a voxel set from a flat mesh.
///
/// `fill` colors faces that have no corresponding mesh block (hidden
/// faces and infilled interior voxels). `initial_scale` seeds the scale
/// inference.
///
/// Fails with [`Error::MeshStructure`] when the buffers do not form
/// valid 6-vertex face blocks; no partial result is produced.
pub fn reconstruct(mesh: &FlatMesh, fill: FaceColor, initial_scale: f32) -> Result<Reconstruction> {
    let positions = mesh.positions();
    let normals = mesh.normals();
    let colors = mesh.colors();

    if positions.is_empty() || positions.len() % FACE_VERTEX_COUNT != 0 {
        return Err(Error::MeshStructure(format!(
            "vertex count {} is not a positive multiple of {}",
            positions.len(),
            FACE_VERTEX_COUNT
        )));
    }
    if normals.len() != positions.len() || colors.len() != positions.len() {
        return Err(Error::MeshStructure(format!(
            "buffer lengths disagree: {} positions, {} normals, {} colors",
            positions.len(),
            normals.len(),
            colors.len()
        )));
    }

    let mut voxels = VoxelSet::new();
    let mut scale = initial_scale;
    let mut bounds = GridBounds::EMPTY;
    // Face normals observed per inferred grid cell; cells present here
    // with an empty set were discovered by infill below.
    let mut face_normals: HashMap<IVec3, HashSet<IVec3>> = HashMap::new();

    for v in (0..positions.len()).step_by(FACE_VERTEX_COUNT) {
        let v0 = positions[v];
        let v1 = positions[v + 1];
        let v2 = positions[v + 2];

        let edge = (v1 - v0).length();
        let diagonal = (v0 - v2).length();
        let cell = edge.min(diagonal);
        if cell <= f32::EPSILON {
            return Err(Error::MeshStructure(format!(
                "degenerate face block at vertex {}",
                v
            )));
        }
        scale = scale.min(cell);

        // v0 and v2 are diagonally opposite corners of the face quad,
        // so their midpoint is the face center; backing off by half the
        // normal reverses the synthesis offset.
        let normal = normals[v + 1].round().as_ivec3();
        let index = ((v0 + v2) * 0.5 / cell - normal.as_vec3() * 0.5)
            .round()
            .as_ivec3();

        voxels.try_add(index, fill);
        if let (Some(pos), Some(d)) = (voxels.index_of(index), topology::face_index(normal)) {
            voxels.set_face_color(pos, d, colors[v + 1]);
        }

        bounds.encapsulate(index);
        face_normals.entry(index).or_default().insert(normal);
    }

    infill_interior(&mut voxels, &bounds, &mut face_normals, fill);

    log::debug!(
        "reconstructed {} voxels from {} face blocks (scale {})",
        voxels.len(),
        positions.len() / FACE_VERTEX_COUNT,
        scale
    );

    Ok(Reconstruction { voxels, scale })
}

/// Recover voxels that produced no visible faces.
///
/// If a cell's +X/+Y/+Z face was never observed, that face was culled
/// during synthesis, which can only happen when the neighbor in that
/// direction is solid. The sweep runs in ascending order so cells it
/// adds are themselves examined later and the interior propagates.
fn infill_interior(
    voxels: &mut VoxelSet,
    bounds: &GridBounds,
    face_normals: &mut HashMap<IVec3, HashSet<IVec3>>,
    fill: FaceColor,
) {
    for z in bounds.min.z..bounds.max.z {
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                let index = IVec3::new(x, y, z);
                let missing: Vec<IVec3> = match face_normals.get(&index) {
                    Some(recorded) => POSITIVE_DIRECTIONS
                        .iter()
                        .filter(|axis| !recorded.contains(*axis))
                        .copied()
                        .collect(),
                    None => continue,
                };

                for axis in missing {
                    let neighbor = index + axis;
                    face_normals.entry(neighbor).or_default();
                    voxels.try_add(neighbor, fill);
                }
            }
        }
    }
}
