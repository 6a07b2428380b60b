//! Sparse voxel set with per-face colors

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;
use crate::math::GridBounds;
use crate::voxel::color::FaceColor;
use crate::voxel::topology::FACE_COUNT;

/// Sparse, insertion-ordered set of unit cube voxels.
///
/// Voxel `i` owns the contiguous color block `colors[6*i .. 6*i + 6]`,
/// one entry per canonical face direction. Insertion and removal keep
/// the two vectors in lockstep: `colors.len() == 6 * indices.len()`
/// holds after every operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoxelSet {
    indices: Vec<IVec3>,
    colors: Vec<FaceColor>,
}

impl VoxelSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of voxels
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Remove all voxels and colors
    pub fn clear(&mut self) {
        self.indices.clear();
        self.colors.clear();
    }

    /// Linear lookup of a voxel's position in insertion order.
    ///
    /// Interactive sculpts stay at human-scale voxel counts, so a scan
    /// beats maintaining a side index.
    pub fn index_of(&self, index: IVec3) -> Option<usize> {
        self.indices.iter().position(|i| *i == index)
    }

    /// Membership test
    pub fn contains(&self, index: IVec3) -> bool {
        self.indices.contains(&index)
    }

    /// Insert a voxel with all 6 faces set to `fill`.
    ///
    /// Returns false without mutating anything if the index is already
    /// present.
    pub fn try_add(&mut self, index: IVec3, fill: FaceColor) -> bool {
        if self.contains(index) {
            return false;
        }
        self.indices.push(index);
        self.colors.extend([fill; FACE_COUNT]);
        true
    }

    /// Remove a voxel and its color block. Returns false if absent.
    ///
    /// Relative order of the remaining voxels (and their color blocks)
    /// is preserved.
    pub fn remove(&mut self, index: IVec3) -> bool {
        match self.index_of(index) {
            Some(i) => {
                self.indices.remove(i);
                self.colors.drain(i * FACE_COUNT..(i + 1) * FACE_COUNT);
                true
            }
            None => false,
        }
    }

    /// Stored color of face `face` of the voxel at position `pos`
    pub fn face_color(&self, pos: usize, face: usize) -> FaceColor {
        self.colors[pos * FACE_COUNT + face]
    }

    /// Overwrite a single face color
    pub fn set_face_color(&mut self, pos: usize, face: usize, color: FaceColor) {
        self.colors[pos * FACE_COUNT + face] = color;
    }

    /// Voxel indices in insertion order
    pub fn indices(&self) -> &[IVec3] {
        &self.indices
    }

    /// Raw face colors, 6 consecutive entries per voxel
    pub fn colors(&self) -> &[FaceColor] {
        &self.colors
    }

    /// Negate the flagged coordinate of every voxel index in place
    pub fn flip(&mut self, x: bool, y: bool, z: bool) {
        let flipper = IVec3::new(
            if x { -1 } else { 1 },
            if y { -1 } else { 1 },
            if z { -1 } else { 1 },
        );
        for index in &mut self.indices {
            *index *= flipper;
        }
    }

    /// Inclusive bounds over all voxel indices
    pub fn bounds(&self) -> GridBounds {
        let mut bounds = GridBounds::EMPTY;
        for index in &self.indices {
            bounds.encapsulate(*index);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_color_block_invariant() {
        let mut set = VoxelSet::new();
        assert!(set.try_add(IVec3::ZERO, FaceColor::WHITE));
        assert!(set.try_add(IVec3::new(1, 0, 0), FaceColor::rgb(255, 0, 0)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.colors().len(), 6 * set.len());
        assert_eq!(set.face_color(1, 3), FaceColor::rgb(255, 0, 0));
    }

    #[test]
    fn test_duplicate_add_is_rejected_without_mutation() {
        let mut set = VoxelSet::new();
        set.try_add(IVec3::ZERO, FaceColor::WHITE);
        let indices_before = set.indices().to_vec();
        let colors_before = set.colors().to_vec();

        assert!(!set.try_add(IVec3::ZERO, FaceColor::rgb(0, 255, 0)));
        assert_eq!(set.indices(), &indices_before[..]);
        assert_eq!(set.colors(), &colors_before[..]);
    }

    #[test]
    fn test_remove_takes_matching_color_block() {
        let mut set = VoxelSet::new();
        set.try_add(IVec3::new(0, 0, 0), FaceColor::rgb(10, 0, 0));
        set.try_add(IVec3::new(1, 0, 0), FaceColor::rgb(20, 0, 0));
        set.try_add(IVec3::new(2, 0, 0), FaceColor::rgb(30, 0, 0));

        assert!(set.remove(IVec3::new(1, 0, 0)));
        assert!(!set.remove(IVec3::new(1, 0, 0)));

        assert_eq!(set.len(), 2);
        assert_eq!(set.colors().len(), 6 * set.len());
        // Remaining blocks still belong to their voxels, in order.
        assert_eq!(set.indices(), &[IVec3::new(0, 0, 0), IVec3::new(2, 0, 0)]);
        assert_eq!(set.face_color(0, 0), FaceColor::rgb(10, 0, 0));
        assert_eq!(set.face_color(1, 0), FaceColor::rgb(30, 0, 0));
    }

    #[test]
    fn test_invariant_after_mixed_edits() {
        let mut set = VoxelSet::new();
        for x in -2..3 {
            set.try_add(IVec3::new(x, 0, 0), FaceColor::WHITE);
        }
        set.remove(IVec3::new(0, 0, 0));
        set.try_add(IVec3::new(0, 1, 0), FaceColor::WHITE);
        set.remove(IVec3::new(-2, 0, 0));
        assert_eq!(set.colors().len(), 6 * set.len());
    }

    #[test]
    fn test_flip_x() {
        let mut set = VoxelSet::new();
        set.try_add(IVec3::new(2, 0, 0), FaceColor::WHITE);
        set.flip(true, false, false);
        assert!(set.contains(IVec3::new(-2, 0, 0)));
        assert!(!set.contains(IVec3::new(2, 0, 0)));
    }

    #[test]
    fn test_flip_symmetric_set_is_set_equal() {
        let mut set = VoxelSet::new();
        set.try_add(IVec3::new(1, 0, 0), FaceColor::WHITE);
        set.try_add(IVec3::new(-1, 0, 0), FaceColor::WHITE);
        set.flip(true, false, false);
        assert!(set.contains(IVec3::new(1, 0, 0)));
        assert!(set.contains(IVec3::new(-1, 0, 0)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_bounds() {
        let mut set = VoxelSet::new();
        set.try_add(IVec3::new(-1, 2, 0), FaceColor::WHITE);
        set.try_add(IVec3::new(3, -2, 1), FaceColor::WHITE);
        let bounds = set.bounds();
        assert_eq!(bounds.min, IVec3::new(-1, -2, 0));
        assert_eq!(bounds.max, IVec3::new(3, 2, 1));
    }
}
