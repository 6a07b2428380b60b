//! Fixed cube topology tables
//!
//! A voxel with grid index `i` occupies the world cube
//! `[(i - 0.5) * scale, (i + 0.5) * scale]`, so corner offsets are
//! ±0.5 on each axis and a face center sits at `i + normal * 0.5`.
//! All tables are immutable constants and safe to share across threads.

use crate::core::types::IVec3;
use crate::core::types::Vec3;

/// Number of cube faces
pub const FACE_COUNT: usize = 6;

/// Corner offsets from the cube center. Bit 0 selects +x, bit 1 +y, bit 2 +z.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Canonical face direction order: +X, -X, +Y, -Y, +Z, -Z.
///
/// Face-color slots in a [`VoxelSet`](crate::voxel::VoxelSet) and the
/// rows of [`FACE_TRIANGLES`] both follow this order.
pub const FACE_DIRECTIONS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// The three positive canonical directions, used by interior infill
pub const POSITIVE_DIRECTIONS: [IVec3; 3] = [
    IVec3::new(1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 1),
];

/// Per-face triangle lists as [`CUBE_CORNERS`] indices, terminated by -1.
///
/// Each face is a quad split into two triangles wound counter-clockwise
/// seen from outside. The first triangle of every face is laid out as
/// (corner, edge-adjacent corner, diagonally opposite corner): mesh
/// reconstruction measures the voxel edge from vertices 0-1 and the face
/// center from vertices 0 and 2, so this layout is load-bearing.
pub const FACE_TRIANGLES: [[i8; 7]; 6] = [
    [1, 3, 7, 1, 7, 5, -1], // +X
    [0, 4, 6, 0, 6, 2, -1], // -X
    [2, 6, 7, 2, 7, 3, -1], // +Y
    [0, 1, 5, 0, 5, 4, -1], // -Y
    [4, 5, 7, 4, 7, 6, -1], // +Z
    [0, 2, 3, 0, 3, 1, -1], // -Z
];

/// Find the canonical slot of an integer face direction
pub fn face_index(direction: IVec3) -> Option<usize> {
    FACE_DIRECTIONS.iter().position(|d| *d == direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_roundtrip() {
        for (d, dir) in FACE_DIRECTIONS.iter().enumerate() {
            assert_eq!(face_index(*dir), Some(d));
        }
        assert_eq!(face_index(IVec3::new(1, 1, 0)), None);
        assert_eq!(face_index(IVec3::ZERO), None);
    }

    #[test]
    fn test_triangles_wind_outward() {
        for (d, triangles) in FACE_TRIANGLES.iter().enumerate() {
            let normal = FACE_DIRECTIONS[d].as_vec3();
            let mut t = 0;
            let mut seen = 0;
            while triangles[t] != -1 {
                let v0 = CUBE_CORNERS[triangles[t] as usize];
                let v1 = CUBE_CORNERS[triangles[t + 1] as usize];
                let v2 = CUBE_CORNERS[triangles[t + 2] as usize];
                let cross = (v1 - v0).cross(v2 - v0);
                assert!(cross.dot(normal) > 0.0, "face {} triangle {} winds inward", d, seen);
                t += 3;
                seen += 1;
            }
            assert_eq!(seen, 2);
        }
    }

    #[test]
    fn test_face_corners_lie_on_face_plane() {
        for (d, triangles) in FACE_TRIANGLES.iter().enumerate() {
            let normal = FACE_DIRECTIONS[d].as_vec3();
            for &c in triangles.iter().take_while(|&&c| c != -1) {
                let corner = CUBE_CORNERS[c as usize];
                assert_eq!(corner.dot(normal), 0.5);
            }
        }
    }

    #[test]
    fn test_first_triangle_edge_and_diagonal() {
        // Vertex 0 to 1 must span one edge, 0 to 2 the face diagonal.
        for triangles in FACE_TRIANGLES.iter() {
            let v0 = CUBE_CORNERS[triangles[0] as usize];
            let v1 = CUBE_CORNERS[triangles[1] as usize];
            let v2 = CUBE_CORNERS[triangles[2] as usize];
            assert!(((v1 - v0).length() - 1.0).abs() < 1e-6);
            assert!(((v0 - v2).length() - std::f32::consts::SQRT_2).abs() < 1e-6);
        }
    }
}
