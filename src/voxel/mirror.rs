//! Mirror-axis configuration and sculpt mirroring

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;

/// Which axes sculpt edits are mirrored across
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl MirrorAxes {
    pub const NONE: MirrorAxes = MirrorAxes { x: false, y: false, z: false };

    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    /// True if any axis is enabled
    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    /// Axis lookup by index (0 = x, 1 = y, 2 = z)
    pub fn axis(&self, i: usize) -> bool {
        match i {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => false,
        }
    }
}

/// The 7 axis combinations a sculpt edit can be mirrored across:
/// all three axes, each single axis, each axis pair.
const MIRROR_COMBOS: [[bool; 3]; 7] = [
    [true, true, true],
    [true, false, false],
    [false, true, false],
    [false, false, true],
    [true, true, false],
    [false, true, true],
    [true, false, true],
];

/// Expand a voxel index into its mirrored counterparts.
///
/// A combination applies when every axis it negates is enabled and the
/// mirrored index differs from the base (a voxel sitting on a mirror
/// plane is its own reflection and is skipped). Different combinations
/// can produce the same index; callers deduplicate through
/// [`VoxelSet::try_add`](crate::voxel::VoxelSet::try_add) or idempotent
/// removal.
pub fn mirrored_indices(index: IVec3, axes: MirrorAxes) -> Vec<IVec3> {
    let mut out = Vec::new();
    for combo in MIRROR_COMBOS {
        if combo.iter().enumerate().any(|(i, &negate)| negate && !axes.axis(i)) {
            continue;
        }
        let mut mirror = index;
        for (i, &negate) in combo.iter().enumerate() {
            if negate {
                mirror[i] = -mirror[i];
            }
        }
        if mirror != index {
            out.push(mirror);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(list: &[IVec3], p: IVec3) -> bool {
        list.contains(&p)
    }

    #[test]
    fn test_all_axes_full_mirror() {
        let mirrors = mirrored_indices(IVec3::new(2, 3, 4), MirrorAxes::new(true, true, true));
        assert!(contains(&mirrors, IVec3::new(-2, -3, -4)));
        assert!(contains(&mirrors, IVec3::new(-2, 3, 4)));
        assert!(contains(&mirrors, IVec3::new(2, -3, 4)));
        assert!(contains(&mirrors, IVec3::new(2, 3, -4)));
        assert!(contains(&mirrors, IVec3::new(-2, -3, 4)));
        assert!(contains(&mirrors, IVec3::new(2, -3, -4)));
        assert!(contains(&mirrors, IVec3::new(-2, 3, -4)));
        assert_eq!(mirrors.len(), 7);
    }

    #[test]
    fn test_single_axis() {
        let mirrors = mirrored_indices(IVec3::new(2, 0, 0), MirrorAxes::new(true, false, false));
        assert_eq!(mirrors, vec![IVec3::new(-2, 0, 0)]);
    }

    #[test]
    fn test_on_plane_no_self_mirror() {
        let mirrors = mirrored_indices(IVec3::new(0, 3, 4), MirrorAxes::new(true, false, false));
        assert!(mirrors.is_empty());
    }

    #[test]
    fn test_disabled_axes_ignored() {
        let mirrors = mirrored_indices(IVec3::new(2, 3, 4), MirrorAxes::NONE);
        assert!(mirrors.is_empty());
    }

    #[test]
    fn test_pair_requires_nonzero_component() {
        // Pair combos apply when at least one mirrored component is nonzero.
        let mirrors = mirrored_indices(IVec3::new(0, 0, 4), MirrorAxes::new(true, true, false));
        assert!(mirrors.is_empty());

        let mirrors = mirrored_indices(IVec3::new(2, 0, 4), MirrorAxes::new(true, true, false));
        assert!(contains(&mirrors, IVec3::new(-2, 0, 4)));
    }

    #[test]
    fn test_origin_never_mirrors() {
        let mirrors = mirrored_indices(IVec3::ZERO, MirrorAxes::new(true, true, true));
        assert!(mirrors.is_empty());
    }
}
