//! Flat triangle mesh buffers and the voxel conversions in both directions

pub mod flat;
pub mod synthesis;
pub mod reconstruct;

pub use flat::{FlatMesh, FlatMeshBuilder, MeshId, MeshVertex};
pub use reconstruct::{reconstruct, Reconstruction, FACE_VERTEX_COUNT};
pub use synthesis::synthesize_into;
