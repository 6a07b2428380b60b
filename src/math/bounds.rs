//! Integer bounding range over voxel grid indices

use crate::core::types::{IVec3, Vec3};

/// Axis-aligned integer bounds defined by inclusive min and max corners.
///
/// Starts inverted ([`GridBounds::EMPTY`]) so the first
/// [`encapsulate`](GridBounds::encapsulate) snaps both corners to the
/// first point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub min: IVec3,
    pub max: IVec3,
}

impl GridBounds {
    /// Inverted bounds, ready for encapsulation
    pub const EMPTY: GridBounds = GridBounds {
        min: IVec3::splat(i32::MAX),
        max: IVec3::splat(i32::MIN),
    };

    /// Create bounds from min and max corners
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Grow the bounds to include a point
    pub fn encapsulate(&mut self, point: IVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True once at least one point has been encapsulated
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Center point (fractional for even extents)
    pub fn center(&self) -> Vec3 {
        (self.min + self.max).as_vec3() * 0.5
    }

    /// Size (max - min)
    pub fn extents(&self) -> IVec3 {
        self.max - self.min
    }

    /// Check if a grid point lies within the bounds (inclusive)
    pub fn contains(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_invalid() {
        assert!(!GridBounds::EMPTY.is_valid());
    }

    #[test]
    fn test_encapsulate() {
        let mut bounds = GridBounds::EMPTY;
        bounds.encapsulate(IVec3::new(1, 2, 3));
        bounds.encapsulate(IVec3::new(-1, -2, -3));

        assert!(bounds.is_valid());
        assert_eq!(bounds.min, IVec3::new(-1, -2, -3));
        assert_eq!(bounds.max, IVec3::new(1, 2, 3));
        assert_eq!(bounds.extents(), IVec3::new(2, 4, 6));
        assert_eq!(bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn test_contains() {
        let bounds = GridBounds::new(IVec3::ZERO, IVec3::splat(2));
        assert!(bounds.contains(IVec3::ONE));
        assert!(bounds.contains(IVec3::ZERO));
        assert!(!bounds.contains(IVec3::new(3, 1, 1)));
        assert!(!bounds.contains(IVec3::new(1, -1, 1)));
    }
}
