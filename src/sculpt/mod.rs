//! Interactive sculpting session
//!
//! [`Sculptor`] is a plain value owned by the host application. The host
//! calls the lifecycle hooks ([`on_attach`](Sculptor::on_attach),
//! [`on_frame`](Sculptor::on_frame), [`on_detach`](Sculptor::on_detach))
//! and forwards pointer events with precomputed ray hits; the sculptor
//! keeps its voxel set and synthesized mesh consistent after every edit.

pub mod mode;
pub mod event;
pub mod preview;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, Result};
use crate::mesh::flat::FlatMesh;
use crate::mesh::{reconstruct, synthesis};
use crate::voxel::color::FaceColor;
use crate::voxel::mirror::{self, MirrorAxes};
use crate::voxel::set::VoxelSet;
use crate::voxel::topology;

pub use event::{EventResponse, PointerButton, PointerEvent, RayHit};
pub use mode::Mode;
pub use preview::PreviewRect;
pub use store::{DirAssetStore, MemoryAssetStore, MeshAssetStore};

/// The entire durable state of one sculptable object.
///
/// The synthesized mesh is a derived artifact and is rebuilt from this
/// on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SculptorDoc {
    pub voxels: VoxelSet,
    pub scale: f32,
    pub paint_color: FaceColor,
    pub mirror_axes: MirrorAxes,
}

/// Interactive voxel sculpting session.
///
/// ```
/// use voxsculpt::sculpt::{PointerButton, PointerEvent, RayHit, Sculptor};
/// use glam::Vec3;
///
/// let mut sculptor = Sculptor::new();
/// sculptor.on_attach();
/// sculptor.begin_sculpting().unwrap();
///
/// // Click the +Y face of the seed voxel: a new voxel grows on top.
/// let response = sculptor.handle_event(&PointerEvent::Down {
///     button: PointerButton::Primary,
///     hit: Some(RayHit::new(Vec3::new(0.0, 0.5, 0.0), Vec3::Y)),
///     remove_modifier: false,
/// });
/// assert!(response.consumed);
/// assert_eq!(sculptor.voxels().len(), 2);
/// ```
#[derive(Debug)]
pub struct Sculptor {
    voxels: VoxelSet,
    scale: f32,
    paint_color: FaceColor,
    mirror_axes: MirrorAxes,
    mode: Mode,
    mesh: FlatMesh,
    dirty: bool,
    attached: bool,
    /// Scale the mesh was last synthesized with; reconciled in `on_frame`
    synced_scale: f32,
}

impl Sculptor {
    /// Create an empty sculptor; call [`on_attach`](Self::on_attach)
    /// before use
    pub fn new() -> Self {
        Self {
            voxels: VoxelSet::new(),
            scale: 1.0,
            paint_color: FaceColor::WHITE,
            mirror_axes: MirrorAxes::NONE,
            mode: Mode::Idle,
            mesh: FlatMesh::new(),
            dirty: false,
            attached: false,
            synced_scale: 1.0,
        }
    }

    /// Restore a sculptor from its persisted document
    pub fn from_doc(doc: SculptorDoc) -> Self {
        let mut sculptor = Self::new();
        sculptor.voxels = doc.voxels;
        sculptor.scale = doc.scale;
        sculptor.paint_color = doc.paint_color;
        sculptor.mirror_axes = doc.mirror_axes;
        sculptor.rebuild_mesh();
        sculptor.dirty = false;
        sculptor.attached = true;
        sculptor
    }

    /// Snapshot the durable state
    pub fn to_doc(&self) -> SculptorDoc {
        SculptorDoc {
            voxels: self.voxels.clone(),
            scale: self.scale,
            paint_color: self.paint_color,
            mirror_axes: self.mirror_axes,
        }
    }

    // ---------------------------------------------------------------
    // Lifecycle hooks
    // ---------------------------------------------------------------

    /// Attach to a host object. The first attach of an empty sculptor
    /// seeds the voxel set with the origin voxel and synthesizes the
    /// initial mesh.
    pub fn on_attach(&mut self) {
        if !self.attached {
            self.attached = true;
            if self.voxels.is_empty() {
                self.reset();
            } else if self.mesh.is_empty() {
                self.rebuild_mesh();
            }
        }
    }

    /// Once-per-tick reconciliation of host-editable properties.
    ///
    /// Currently this only reacts to a scale change made through
    /// [`set_scale`](Self::set_scale) since the last synthesis.
    pub fn on_frame(&mut self) {
        if self.synced_scale != self.scale {
            log::debug!("scale changed {} -> {}", self.synced_scale, self.scale);
            self.rebuild_mesh();
        }
    }

    /// Detach from the host, force-ending any active mode
    pub fn on_detach(&mut self) {
        if self.mode != Mode::Idle {
            log::warn!("detached while {:?}; returning to idle", self.mode);
            self.mode = Mode::Idle;
        }
        self.attached = false;
    }

    /// Back to factory state: scale 1, white paint, no mirrors, one
    /// voxel at the origin
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.paint_color = FaceColor::WHITE;
        self.mirror_axes = MirrorAxes::NONE;
        self.voxels.clear();
        self.voxels.try_add(IVec3::ZERO, self.paint_color);
        self.rebuild_mesh();
        log::info!("sculptor reset");
    }

    // ---------------------------------------------------------------
    // Properties
    // ---------------------------------------------------------------

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the voxel edge length. Non-positive values are ignored. The
    /// mesh is resynthesized on the next [`on_frame`](Self::on_frame).
    pub fn set_scale(&mut self, scale: f32) {
        if scale > 0.0 {
            self.scale = scale;
        } else {
            log::warn!("ignoring non-positive scale {}", scale);
        }
    }

    pub fn paint_color(&self) -> FaceColor {
        self.paint_color
    }

    /// Color applied to newly added voxels and by paint actions
    pub fn set_paint_color(&mut self, color: FaceColor) {
        self.paint_color = color;
    }

    pub fn mirror_axes(&self) -> MirrorAxes {
        self.mirror_axes
    }

    pub fn set_mirror_axes(&mut self, axes: MirrorAxes) {
        self.mirror_axes = axes;
    }

    /// The synthesized mesh. Its version bumps whenever the buffers are
    /// rebuilt; renderers compare it to decide when to re-upload.
    pub fn mesh(&self) -> &FlatMesh {
        &self.mesh
    }

    pub fn voxels(&self) -> &VoxelSet {
        &self.voxels
    }

    // ---------------------------------------------------------------
    // Mode state machine
    // ---------------------------------------------------------------

    pub fn is_sculpting(&self) -> bool {
        self.mode.is_sculpting()
    }

    pub fn is_painting(&self) -> bool {
        self.mode.is_painting()
    }

    pub fn begin_sculpting(&mut self) -> Result<()> {
        self.mode.begin_sculpting()
    }

    pub fn end_sculpting(&mut self) -> Result<()> {
        self.mode.end_sculpting()
    }

    pub fn begin_painting(&mut self) -> Result<()> {
        self.mode.begin_painting()
    }

    pub fn end_painting(&mut self) -> Result<()> {
        self.mode.end_painting()
    }

    // ---------------------------------------------------------------
    // Event dispatch
    // ---------------------------------------------------------------

    /// Dispatch one pointer event according to the current mode.
    ///
    /// Edits happen on primary-button presses (and drags while
    /// painting); repaint events only produce preview geometry. Events
    /// are never dispatched as edits while idle.
    pub fn handle_event(&mut self, event: &PointerEvent) -> EventResponse {
        let mut response = EventResponse::default();
        match event {
            PointerEvent::Down {
                button: PointerButton::Primary,
                hit,
                remove_modifier,
            } => {
                if let Some(hit) = hit {
                    match self.mode {
                        Mode::Sculpting => self.sculpt(hit, *remove_modifier),
                        Mode::Painting => self.paint(hit),
                        Mode::Idle => {}
                    }
                }
                response.consumed = self.mode != Mode::Idle;
            }
            PointerEvent::Drag {
                button: PointerButton::Primary,
                hit,
            } => {
                if let Some(hit) = hit {
                    if self.mode.is_painting() {
                        self.paint(hit);
                    }
                }
                response.consumed = self.mode != Mode::Idle;
            }
            PointerEvent::Moved => {
                response.repaint_requested = true;
            }
            PointerEvent::Repaint { hit } => {
                if self.mode != Mode::Idle {
                    response.grid_rect = hit.map(|h| preview::grid_rect(&h, self.scale));
                }
                if self.mode.is_sculpting() {
                    response.mirror_planes =
                        preview::mirror_planes(&self.voxels, self.mirror_axes, self.scale);
                }
            }
            _ => {}
        }
        response
    }

    // ---------------------------------------------------------------
    // Edit operations
    // ---------------------------------------------------------------

    /// Add or remove the voxel behind/in front of the hit face, plus
    /// every enabled mirror image, then resynthesize.
    ///
    /// The half-normal offset selects the cell on the far side of the
    /// face when adding and the near side when removing.
    pub fn sculpt(&mut self, hit: &RayHit, remove: bool) {
        let point = hit.point / self.scale;
        let offset = hit.normal * 0.5;

        if remove {
            let index = (point - offset).round().as_ivec3();
            self.voxels.remove(index);
            for mirror in mirror::mirrored_indices(index, self.mirror_axes) {
                self.voxels.remove(mirror);
            }
        } else {
            let index = (point + offset).round().as_ivec3();
            self.voxels.try_add(index, self.paint_color);
            for mirror in mirror::mirrored_indices(index, self.mirror_axes) {
                self.voxels.try_add(mirror, self.paint_color);
            }
        }

        self.rebuild_mesh();
    }

    /// Repaint the hit face with the current paint color.
    ///
    /// A no-op (no resynthesis, version unchanged) when the face already
    /// has that color, when the hit voxel is absent, or when the hit
    /// normal does not round to a canonical direction.
    pub fn paint(&mut self, hit: &RayHit) {
        let point = hit.point / self.scale;
        let index = (point - hit.normal * 0.5).round().as_ivec3();
        let direction = hit.normal.round().as_ivec3();

        if let (Some(pos), Some(face)) =
            (self.voxels.index_of(index), topology::face_index(direction))
        {
            if self.voxels.face_color(pos, face) != self.paint_color {
                self.voxels.set_face_color(pos, face, self.paint_color);
                self.rebuild_mesh();
            }
        }
    }

    /// Mirror every voxel index across the flagged axes, then
    /// resynthesize
    pub fn flip(&mut self, x: bool, y: bool, z: bool) {
        self.voxels.flip(x, y, z);
        self.rebuild_mesh();
    }

    // ---------------------------------------------------------------
    // External mesh replacement & persistence
    // ---------------------------------------------------------------

    /// React to the host swapping the mesh resource (e.g. reverting to
    /// a saved asset).
    ///
    /// An empty replacement is treated as a fresh target and overwritten
    /// from the current voxel set. Otherwise the voxel set and scale are
    /// reconstructed from the replacement and its buffers and identity
    /// adopted, so a later [`save`](Self::save) writes back to whatever
    /// path the replacement was loaded from. On reconstruction failure
    /// nothing is modified.
    pub fn replace_mesh(&mut self, other: &FlatMesh) -> Result<()> {
        if other.is_empty() {
            self.rebuild_mesh();
            return Ok(());
        }

        let result = reconstruct::reconstruct(other, self.paint_color, self.scale)?;
        log::info!(
            "adopted external mesh: {} voxels, scale {}",
            result.voxels.len(),
            result.scale
        );
        self.voxels = result.voxels;
        self.scale = result.scale;
        self.synced_scale = result.scale;
        self.mesh.adopt(other);
        Ok(())
    }

    /// True when there are unsaved edits
    pub fn can_save(&self) -> bool {
        self.dirty
    }

    /// Persist the synthesized mesh through the asset store.
    ///
    /// A no-op when there is nothing to save. Reuses the path the mesh
    /// resource is already stored at, otherwise asks the store for one;
    /// a declined prompt fails with `Error::Asset` and keeps the dirty
    /// flag set.
    pub fn save<S: MeshAssetStore>(&mut self, store: &mut S) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let path = match store.existing_path(&self.mesh) {
            Some(path) => path,
            None => store
                .prompt_save_path()
                .ok_or_else(|| crate::core::Error::Asset("save prompt declined".into()))?,
        };

        store.create(&self.mesh, &path)?;
        store.commit()?;
        self.dirty = false;
        log::info!("saved mesh to {:?}", path);
        Ok(())
    }

    fn rebuild_mesh(&mut self) {
        synthesis::synthesize_into(&self.voxels, self.scale, &mut self.mesh);
        self.synced_scale = self.scale;
        self.dirty = true;
    }
}

impl Default for Sculptor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the grid index a sculpt action at `hit` would operate on.
///
/// Exposed for hosts that want to show the affected cell in their UI
/// without performing the edit.
pub fn sculpt_target(hit: &RayHit, scale: f32, remove: bool) -> IVec3 {
    let point = hit.point / scale;
    let offset = hit.normal * 0.5;
    let target = if remove { point - offset } else { point + offset };
    target.round().as_ivec3()
}
