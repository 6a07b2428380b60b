//! Voxsculpt - an interactive voxel sculpting core
//!
//! Maintains a sparse set of unit cube voxels with per-face colors and
//! rebuilds a flat, face-culled triangle mesh after every edit. The
//! conversion also runs in reverse: a flat mesh with the same
//! 6-vertices-per-face layout can be decoded back into a voxel set,
//! including interior voxels that left no visible geometry.
//!
//! The host application owns a [`sculpt::Sculptor`] and feeds it pointer
//! events with precomputed ray hits; raycasting, rendering and the asset
//! database stay on the host side.

pub mod core;
pub mod math;
pub mod voxel;
pub mod mesh;
pub mod sculpt;
