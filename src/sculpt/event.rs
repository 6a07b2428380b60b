//! Pointer interaction events supplied by the host
//!
//! The host performs all raycasting against its own scene; the core only
//! sees the resulting hit in sculptor-local space.

use crate::core::types::Vec3;
use crate::sculpt::preview::PreviewRect;

/// A raycast hit against the sculpted mesh, in sculptor-local space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Hit point on the mesh surface
    pub point: Vec3,
    /// Unit surface normal at the hit
    pub normal: Vec3,
}

impl RayHit {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// Pointer button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One discrete interaction stimulus.
///
/// `hit` is `None` on a raycast miss; edits are silently skipped then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button press
    Down {
        button: PointerButton,
        hit: Option<RayHit>,
        /// Remove instead of add while sculpting (shift held)
        remove_modifier: bool,
    },
    /// Pointer moved with a button held
    Drag {
        button: PointerButton,
        hit: Option<RayHit>,
    },
    /// Pointer moved with no button held
    Moved,
    /// The host is redrawing and wants preview geometry
    Repaint { hit: Option<RayHit> },
}

/// What the host should do after an event was dispatched
#[derive(Clone, Debug, Default)]
pub struct EventResponse {
    /// The event triggered an edit and should not reach other tools
    pub consumed: bool,
    /// The hover position changed; the host should schedule a repaint
    pub repaint_requested: bool,
    /// Grid cell highlight under the pointer, if any
    pub grid_rect: Option<PreviewRect>,
    /// One translucent plane per enabled mirror axis (sculpting only)
    pub mirror_planes: Vec<PreviewRect>,
}
