//! Sparse voxel data structures and cube topology

pub mod color;
pub mod topology;
pub mod mirror;
pub mod set;

pub use color::FaceColor;
pub use mirror::MirrorAxes;
pub use set::VoxelSet;
pub use topology::{CUBE_CORNERS, FACE_COUNT, FACE_DIRECTIONS, FACE_TRIANGLES};
