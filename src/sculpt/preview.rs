//! Preview rectangle geometry for the host to draw
//!
//! The core computes only the corner positions and colors; actual
//! drawing (and any world transform) is the rendering collaborator's
//! job. All coordinates are sculptor-local.

use crate::core::types::{IVec3, Quat, Vec3};
use crate::sculpt::event::RayHit;
use crate::voxel::mirror::MirrorAxes;
use crate::voxel::set::VoxelSet;

/// Translucent fill of the hover highlight
pub const RECT_FILL: [f32; 4] = [1.0, 1.0, 1.0, 32.0 / 255.0];
/// Outline shared by all preview rectangles
pub const RECT_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 128.0 / 255.0];
/// Alpha of the mirror plane tint
const MIRROR_ALPHA: f32 = 32.0 / 255.0;

/// A filled, outlined rectangle for the host to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewRect {
    pub corners: [Vec3; 4],
    pub fill: [f32; 4],
    pub outline: [f32; 4],
}

/// Corners of a unit XZ rectangle placed at `position`, scaled by
/// `size` and rotated so its +Y points along the target normal
fn rect_corners(position: Vec3, size: Vec3, rotation: Quat) -> [Vec3; 4] {
    [
        Vec3::new(-0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, -0.5),
    ]
    .map(|corner| position + rotation * (corner * size))
}

/// Highlight of the grid cell face under the pointer.
///
/// The hit point is snapped to the voxel grid along the hit face plane,
/// so the rectangle hugs the face that a sculpt click would operate on.
pub fn grid_rect(hit: &RayHit, scale: f32) -> PreviewRect {
    let offset = hit.normal * 0.5;
    let position = ((hit.point / scale + offset).round() - offset) * scale;
    let rotation = Quat::from_rotation_arc(Vec3::Y, hit.normal);

    PreviewRect {
        corners: rect_corners(position, Vec3::splat(scale), rotation),
        fill: RECT_FILL,
        outline: RECT_OUTLINE,
    }
}

/// One translucent plane per enabled mirror axis, tinted by axis color
/// and sized to the voxel set's bounds plus a 2-cell margin.
pub fn mirror_planes(voxels: &VoxelSet, axes: MirrorAxes, scale: f32) -> Vec<PreviewRect> {
    let bounds = voxels.bounds();
    if !axes.any() || !bounds.is_valid() {
        return Vec::new();
    }

    let center = bounds.center() * scale;
    let extents = (bounds.extents() + IVec3::splat(2)).as_vec3() * scale;

    let mut rects = Vec::new();
    for i in 0..3 {
        if !axes.axis(i) {
            continue;
        }

        let mut normal = Vec3::ZERO;
        normal[i] = 1.0;
        // The plane passes through the grid origin on its own axis and
        // through the set's center on the other two.
        let mut position = center;
        position[i] = 0.0;

        let size = Vec3::new(
            if i == 0 { extents.y } else { extents.x },
            0.0,
            if i == 2 { extents.y } else { extents.z },
        );

        rects.push(PreviewRect {
            corners: rect_corners(position, size, Quat::from_rotation_arc(Vec3::Y, normal)),
            fill: [normal.x, normal.y, normal.z, MIRROR_ALPHA],
            outline: RECT_OUTLINE,
        });
    }
    rects
}
