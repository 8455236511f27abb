//! Tile Brush Session
//!
//! Orchestrates one interactive brush session: owns the preview pose, the
//! placement ledger and the undo log, and drives the scene collaborator so
//! the structure geometry always mirrors the ledger.
//!
//! ## Lifecycle
//! `invoke` loads assets and links the preview (Invoked -> Running). `cancel`
//! and `finish` consume the session; dropping a running session cancels it.
//! Teardown removes the preview but never the structure.
//!
//! ## Structure consistency
//! The ledger is canonical and the structure is derived. When a scene call
//! fails mid-commit the structure is rebuilt from the ledger; if that fails
//! too it is marked stale and rebuilt before the next ledger mutation.

use glam::{Mat3, Vec2, Vec3};
use tracing::{debug, info, warn};

use super::config::BrushConfig;
use super::error::{BrushError, SceneError};
use super::ledger::PlacementLedger;
use super::pose::{PlacementKey, PreviewPose};
use super::scene::{
    AssetProvider, ObjectId, PREVIEW_NAME, STRUCTURE_NAME, SceneLinker, TILE_NAME, TileLibrary,
    TileTransform,
};
use super::status::{SessionState, SessionStatus, StatusSink};
use super::undo::{StructureSnapshot, UndoLog, UndoSnapshot};
use crate::camera::{CameraAccessor, Ray, ViewAxes, intersect_horizontal_plane};
use crate::input::{BrushIntent, MoveDirection, PointerTracker, RotateIntent};
use crate::world::{SpeedMode, TileSize, snap, snap_horizontal, snaps_after_move, step_size};

/// Result of a preview move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// New preview center
    pub position: Vec3,
    /// Tile placed by auto-mode, if any
    pub placed: Option<PlacementKey>,
}

/// What the host should do after [`TileBrushSession::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    /// Call [`TileBrushSession::cancel`]
    Cancel,
    /// Call [`TileBrushSession::finish`]
    Finish,
}

/// Final report of an ended session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub state: SessionState,
    /// Tiles in the ledger at exit
    pub tiles: usize,
    /// The structure left in the scene
    pub structure: Option<ObjectId>,
}

pub struct TileBrushSession<'s, S: SceneLinker> {
    scene: &'s mut S,
    config: BrushConfig,
    library: TileLibrary,

    pose: PreviewPose,
    /// Persistent speed (Normal or Fast)
    speed: SpeedMode,
    auto_mode: bool,
    /// Speed to restore when auto-mode is switched off
    speed_before_auto: SpeedMode,
    view: ViewAxes,
    pointer: PointerTracker,

    preview: ObjectId,
    structure: Option<ObjectId>,
    /// Structure geometry no longer mirrors the ledger
    structure_stale: bool,

    ledger: PlacementLedger,
    undo: UndoLog,
    /// Pose of the last successful placement, cleared by any pose change
    last_placed: Option<PreviewPose>,

    sink: Option<Box<dyn StatusSink + 's>>,
    state: SessionState,
}

impl<'s, S: SceneLinker> TileBrushSession<'s, S> {
    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Start a session with the preview near `start`.
    ///
    /// Fails with [`BrushError::MissingAssets`] when a required prototype is
    /// missing, or with [`BrushError::Scene`] when the preview cannot be linked.
    pub fn invoke(
        config: BrushConfig,
        assets: &dyn AssetProvider,
        scene: &'s mut S,
        start: Vec3,
    ) -> Result<Self, BrushError> {
        let config = config.sanitized();
        let library = TileLibrary::load(assets)?;

        let size = config.start_tile_size();
        let pose = PreviewPose::new(snap(start, size, SpeedMode::Normal), size);
        let preview = scene.instantiate(
            PREVIEW_NAME,
            &library.get(size, false).volume,
            preview_transform(&pose),
        )?;

        let mut session = Self {
            scene,
            pointer: PointerTracker::new(config.precision_pointer_threshold),
            undo: UndoLog::new(config.undo_limit),
            config,
            library,
            pose,
            speed: SpeedMode::Normal,
            auto_mode: false,
            speed_before_auto: SpeedMode::Normal,
            view: ViewAxes::default(),
            preview,
            structure: None,
            structure_stale: false,
            ledger: PlacementLedger::new(),
            last_placed: None,
            sink: None,
            state: SessionState::Invoked,
        };
        session.state = SessionState::Running;
        info!(
            "Tile brush started at {:?} (size {}, inverted tiles {})",
            session.pose.position,
            size.label(),
            if session.library.has_inverted() { "available" } else { "unavailable" }
        );
        Ok(session)
    }

    /// Discard the preview and end the session. Placed tiles stay.
    pub fn cancel(mut self) -> SessionSummary {
        self.teardown(SessionState::Cancelled);
        self.summary()
    }

    /// Discard the preview and end the session, keeping the structure.
    pub fn finish(mut self) -> SessionSummary {
        self.teardown(SessionState::Finished);
        self.summary()
    }

    fn teardown(&mut self, state: SessionState) {
        if self.state != SessionState::Running {
            return;
        }
        if let Err(err) = self.scene.remove(self.preview) {
            warn!("Failed to remove preview: {err}");
        }
        if self.structure_stale {
            if let Err(err) = self.rebuild_structure() {
                warn!("Structure left out of sync with {} placed tiles: {err}", self.ledger.len());
            }
        }
        self.state = state;
        info!("Tile brush {:?} with {} tiles", state, self.ledger.len());
        self.publish();
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            tiles: self.ledger.len(),
            structure: self.structure,
        }
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Receive status updates after every successful operation.
    pub fn set_status_sink(&mut self, sink: impl StatusSink + 's) {
        self.sink = Some(Box::new(sink));
        self.publish();
    }

    /// Re-project movement axes from a camera rotation.
    pub fn update_view(&mut self, view_rotation: Option<Mat3>) {
        self.view = ViewAxes::from_view_rotation(view_rotation);
        debug!("View axes forward {:?} right {:?}", self.view.forward, self.view.right);
    }

    pub fn update_view_from(&mut self, camera: &dyn CameraAccessor) {
        self.update_view(camera.view_rotation());
    }

    /// Route one intent to its operation.
    pub fn apply(&mut self, intent: BrushIntent) -> Result<SessionFlow, BrushError> {
        match intent {
            BrushIntent::Move {
                direction,
                precision,
            } => {
                self.move_preview(direction, precision)?;
            }
            BrushIntent::ChangeSize(direction) => {
                self.change_size(direction)?;
            }
            BrushIntent::Rotate(rotate) => self.rotate(rotate)?,
            BrushIntent::ToggleInvert => {
                self.toggle_invert()?;
            }
            BrushIntent::ToggleSpeed => {
                self.toggle_speed()?;
            }
            BrushIntent::ToggleAuto => {
                self.toggle_auto();
            }
            BrushIntent::Commit => {
                self.commit()?;
            }
            BrushIntent::Delete => {
                self.delete_at_current()?;
            }
            BrushIntent::Undo => self.undo()?,
            BrushIntent::Cancel => return Ok(SessionFlow::Cancel),
            BrushIntent::Finish => return Ok(SessionFlow::Finish),
        }
        Ok(SessionFlow::Continue)
    }

    // ========================================================================
    // MOVEMENT
    // ========================================================================

    /// Step the preview one unit along a view-relative direction.
    ///
    /// Normal moves re-snap X/Y to the size grid; Fast and precision moves
    /// land exactly one step away. In auto-mode a tile is placed afterwards.
    pub fn move_preview(
        &mut self,
        direction: MoveDirection,
        precision: bool,
    ) -> Result<MoveOutcome, BrushError> {
        let mode = self.speed.with_precision(precision);
        let step = step_size(self.pose.size, mode);
        let mut position = self.pose.position + direction.world_vector(&self.view) * step;
        if snaps_after_move(mode) {
            position = snap_horizontal(position, self.pose.size, mode);
        }
        debug!("Move {direction:?} ({}) by {step} to {position:?}", mode.label());

        self.set_position(position)?;
        let placed = if self.auto_mode { self.auto_place()? } else { None };
        self.publish();
        Ok(MoveOutcome { position, placed })
    }

    /// Move the preview under a world point (the pointer projected onto the
    /// preview's horizontal plane). X/Y snap to the active grid, Z is kept.
    ///
    /// Auto-mode only places when the preview actually travelled more than
    /// `auto_place_min_delta`.
    pub fn pointer_move(&mut self, point: Vec3) -> Result<MoveOutcome, BrushError> {
        let old = self.pose.position;
        let target = Vec3::new(point.x, point.y, old.z);
        let position = snap_horizontal(target, self.pose.size, self.speed);
        let travelled = position.distance(old);
        if travelled == 0.0 {
            return Ok(MoveOutcome {
                position,
                placed: None,
            });
        }

        self.set_position(position)?;
        let placed = if self.auto_mode && travelled > self.config.auto_place_min_delta {
            self.auto_place()?
        } else {
            None
        };
        self.publish();
        Ok(MoveOutcome { position, placed })
    }

    /// Intersect a pointer ray with the preview's horizontal plane and move there.
    ///
    /// Returns `None` when the ray never reaches the plane.
    pub fn pointer_ray(&mut self, ray: &Ray) -> Result<Option<MoveOutcome>, BrushError> {
        match intersect_horizontal_plane(ray, self.pose.position.z) {
            Some(point) => self.pointer_move(point).map(Some),
            None => {
                debug!("Pointer ray misses the preview plane");
                Ok(None)
            }
        }
    }

    /// Resolve a screen position through the camera and move there.
    pub fn pointer_at(
        &mut self,
        camera: &dyn CameraAccessor,
        screen: Vec2,
    ) -> Result<Option<MoveOutcome>, BrushError> {
        match camera.screen_ray(screen) {
            Some(ray) => self.pointer_ray(&ray),
            None => Ok(None),
        }
    }

    /// Feed pointer motion while precision is held. Every time the pointer
    /// travels past the threshold the preview moves one precision step.
    pub fn pointer_nudge(&mut self, screen: Vec2) -> Result<Option<MoveOutcome>, BrushError> {
        match self.pointer.nudge(screen) {
            Some(direction) => self.move_preview(direction, true).map(Some),
            None => Ok(None),
        }
    }

    /// Forget the precision drag anchor (precision modifier released).
    pub fn reset_pointer(&mut self) {
        self.pointer.reset();
    }

    // ========================================================================
    // SIZE / ORIENTATION / MODES
    // ========================================================================

    /// Grow (`> 0`) or shrink (`< 0`) the tile size with wraparound.
    ///
    /// The placement face keeps its world height; the center moves to suit
    /// the new size.
    pub fn change_size(&mut self, direction: i32) -> Result<TileSize, BrushError> {
        if direction == 0 {
            return Ok(self.pose.size);
        }
        let old_size = self.pose.size;
        let size = old_size.cycle(direction);
        let face = self.pose.placement_face_position();
        let offset = self.pose.orientation.matrix() * PreviewPose::local_face_offset(size);

        let mut position = Vec3::new(self.pose.position.x, self.pose.position.y, face.z - offset.z);
        if self.speed == SpeedMode::Normal {
            position = snap_horizontal(position, size, SpeedMode::Normal);
        }

        self.pose.size = size;
        self.pose.position = position;
        self.last_placed = None;
        self.refresh_preview_mesh()?;
        self.sync_preview()?;
        info!("Tile size {} -> {} (face height {:.3})", old_size.label(), size.label(), face.z);
        self.publish();
        Ok(size)
    }

    /// Apply an orientation change. The preview center does not move.
    pub fn rotate(&mut self, rotate: RotateIntent) -> Result<(), BrushError> {
        let orientation = &mut self.pose.orientation;
        match rotate {
            RotateIntent::Cycle => orientation.cycle(),
            RotateIntent::SelectFace(face) => orientation.select_face(face),
            RotateIntent::Spin(direction) => orientation.spin(direction),
        }
        self.last_placed = None;
        self.sync_preview()?;
        info!(
            "Face {} spin {:.0}",
            self.pose.orientation.face().name(),
            self.pose.orientation.spin_degrees()
        );
        self.publish();
        Ok(())
    }

    /// Switch between normal and inverted tiles. Returns the new state.
    pub fn toggle_invert(&mut self) -> Result<bool, BrushError> {
        if !self.library.has_inverted() {
            warn!("Inverted tiles requested but not loaded");
            return Err(BrushError::InvertUnavailable);
        }
        self.pose.orientation.toggle_inversion();
        self.last_placed = None;
        self.refresh_preview_mesh()?;
        let inverted = self.pose.orientation.inverted();
        info!("Inverted tiles {}", if inverted { "on" } else { "off" });
        self.publish();
        Ok(inverted)
    }

    /// Swap Normal and Fast. Rejected while auto-mode holds the speed.
    pub fn toggle_speed(&mut self) -> Result<SpeedMode, BrushError> {
        if self.auto_mode {
            warn!("Speed toggle ignored while auto-mode is on");
            return Err(BrushError::SpeedLocked);
        }
        self.speed = self.speed.toggled();
        info!("Speed {}", self.speed.label());
        self.publish();
        Ok(self.speed)
    }

    /// Enable or disable auto-mode. Enabling forces Fast; disabling restores
    /// the previous speed. Returns the new state.
    pub fn toggle_auto(&mut self) -> bool {
        if self.auto_mode {
            self.auto_mode = false;
            self.speed = self.speed_before_auto;
        } else {
            self.auto_mode = true;
            self.speed_before_auto = self.speed;
            self.speed = SpeedMode::Fast;
        }
        info!("Auto-mode {} (speed {})", if self.auto_mode { "on" } else { "off" }, self.speed.label());
        self.publish();
        self.auto_mode
    }

    // ========================================================================
    // LEDGER OPERATIONS
    // ========================================================================

    /// Place a tile at the current placement face.
    pub fn commit(&mut self) -> Result<PlacementKey, BrushError> {
        let key = self.place()?;
        self.publish();
        Ok(key)
    }

    /// Remove the tile at the current placement face and rebuild the structure.
    pub fn delete_at_current(&mut self) -> Result<PlacementKey, BrushError> {
        self.ensure_synced()?;
        let key = self.pose.placement_key();
        if !self.ledger.contains(&key) {
            info!("No tile to delete at {key}");
            return Err(BrushError::NoTileAtPose { key });
        }

        self.push_undo();
        self.ledger.remove(&key);
        self.last_placed = None;
        if let Err(err) = self.rebuild_structure() {
            self.publish();
            return Err(err);
        }
        info!("Tile deleted at {key} - Total tiles: {}", self.ledger.len());
        self.publish();
        Ok(key)
    }

    /// Roll back the most recent placement or deletion.
    pub fn undo(&mut self) -> Result<(), BrushError> {
        let Some(snapshot) = self.undo.pop() else {
            info!("Nothing to undo");
            return Err(BrushError::NothingToUndo);
        };

        self.ledger = snapshot.ledger;
        self.last_placed = None;
        if let Err(err) = self.restore_structure(snapshot.structure) {
            warn!("Restoring structure snapshot failed ({err}), rebuilding from ledger");
            if let Err(err) = self.rebuild_structure() {
                self.publish();
                return Err(err);
            }
        }
        info!("Undo - Total tiles: {} ({} more undo steps)", self.ledger.len(), self.undo.len());
        self.publish();
        Ok(())
    }

    /// Throw away the structure geometry and rebuild it from the ledger.
    pub fn rebuild_structure(&mut self) -> Result<(), BrushError> {
        if let Some(old) = self.structure.take() {
            if let Err(err) = self.scene.remove(old) {
                debug!("Old structure already gone: {err}");
            }
        }

        match self.build_from_ledger() {
            Ok(structure) => {
                self.structure = structure;
                self.structure_stale = false;
                debug!("Rebuilt structure from {} tiles", self.ledger.len());
                Ok(())
            }
            Err(err) => {
                self.structure_stale = true;
                warn!("Structure rebuild failed, will retry: {err}");
                Err(err.into())
            }
        }
    }

    fn place(&mut self) -> Result<PlacementKey, BrushError> {
        let key = self.pose.placement_key();
        if self.last_placed == Some(self.pose) {
            debug!("Suppressed repeat placement at {key}");
            return Err(BrushError::Occupied { key });
        }
        if self.ledger.contains(&key) {
            info!("Cannot place tile - position already occupied");
            return Err(BrushError::Occupied { key });
        }
        self.ensure_synced()?;

        self.push_undo();
        self.ledger.insert(key);
        if let Err(err) = self.add_tile(key) {
            warn!("Tile geometry failed ({err}), rebuilding structure from ledger");
            if let Err(err) = self.rebuild_structure() {
                self.publish();
                return Err(err);
            }
        }
        self.last_placed = Some(self.pose);
        info!("Tile placed at {key} - Total tiles: {}", self.ledger.len());
        Ok(key)
    }

    fn auto_place(&mut self) -> Result<Option<PlacementKey>, BrushError> {
        match self.place() {
            Ok(key) => Ok(Some(key)),
            Err(BrushError::Occupied { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Link the tile for `key` and join it into the structure.
    fn add_tile(&mut self, key: PlacementKey) -> Result<(), SceneError> {
        let surface = &self.library.get(key.size(), key.inverted()).surface;
        let transform = TileTransform::new(key.position(), key.rotation());
        match self.structure {
            None => {
                self.structure = Some(self.scene.instantiate(STRUCTURE_NAME, surface, transform)?);
            }
            Some(structure) => {
                let tile = self.scene.instantiate(TILE_NAME, surface, transform)?;
                if let Err(err) = self.scene.join(structure, tile, self.config.weld_tolerance) {
                    if let Err(remove_err) = self.scene.remove(tile) {
                        debug!("Orphan tile {tile} not removed: {remove_err}");
                    }
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Build a fresh structure for every ledger key, first key first.
    fn build_from_ledger(&mut self) -> Result<Option<ObjectId>, SceneError> {
        let keys: Vec<PlacementKey> = self.ledger.iter().copied().collect();
        for key in keys {
            if let Err(err) = self.add_tile(key) {
                if let Some(partial) = self.structure.take() {
                    if let Err(remove_err) = self.scene.remove(partial) {
                        debug!("Partial structure {partial} not removed: {remove_err}");
                    }
                }
                return Err(err);
            }
        }
        Ok(self.structure)
    }

    fn ensure_synced(&mut self) -> Result<(), BrushError> {
        if self.structure_stale {
            self.rebuild_structure()?;
        }
        Ok(())
    }

    fn capture(&self) -> UndoSnapshot {
        let structure = self
            .structure
            .and_then(|id| Some((self.scene.mesh(id)?, self.scene.transform(id)?)))
            .map_or(StructureSnapshot::Absent, |(mesh, transform)| {
                StructureSnapshot::Mesh { mesh, transform }
            });
        UndoSnapshot {
            ledger: self.ledger.clone(),
            structure,
        }
    }

    fn push_undo(&mut self) {
        let snapshot = self.capture();
        if let Some(evicted) = self.undo.push(snapshot) {
            debug!("Undo log full, dropped snapshot of {} tiles", evicted.ledger.len());
        }
    }

    fn restore_structure(&mut self, snapshot: StructureSnapshot) -> Result<(), SceneError> {
        match snapshot {
            StructureSnapshot::Absent => {
                if let Some(id) = self.structure.take() {
                    self.scene.remove(id)?;
                }
            }
            StructureSnapshot::Mesh { mesh, transform } => match self.structure {
                Some(id) => {
                    self.scene.replace_mesh(id, mesh)?;
                    self.scene.set_transform(id, transform)?;
                }
                None => {
                    self.structure = Some(self.scene.instantiate(STRUCTURE_NAME, &mesh, transform)?);
                }
            },
        }
        self.structure_stale = false;
        Ok(())
    }

    // ========================================================================
    // PREVIEW
    // ========================================================================

    fn set_position(&mut self, position: Vec3) -> Result<(), BrushError> {
        self.pose.position = position;
        self.last_placed = None;
        self.sync_preview()
    }

    fn sync_preview(&mut self) -> Result<(), BrushError> {
        self.scene.set_transform(self.preview, preview_transform(&self.pose))?;
        Ok(())
    }

    fn refresh_preview_mesh(&mut self) -> Result<(), BrushError> {
        let volume = self
            .library
            .get(self.pose.size, self.pose.orientation.inverted())
            .volume
            .clone();
        self.scene.replace_mesh(self.preview, volume)?;
        Ok(())
    }

    // ========================================================================
    // STATUS
    // ========================================================================

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            state: self.state,
            tile_count: self.ledger.len(),
            face: self.pose.orientation.face(),
            spin_degrees: self.pose.orientation.spin_degrees(),
            size: self.pose.size,
            speed: self.speed,
            auto_mode: self.auto_mode,
            inverted: self.pose.orientation.inverted(),
            undo_depth: self.undo.len(),
            position: self.pose.position,
        }
    }

    fn publish(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let status = self.status();
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(&status);
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pose(&self) -> &PreviewPose {
        &self.pose
    }

    pub fn ledger(&self) -> &PlacementLedger {
        &self.ledger
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn speed(&self) -> SpeedMode {
        self.speed
    }

    pub fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn view(&self) -> ViewAxes {
        self.view
    }

    pub fn preview(&self) -> ObjectId {
        self.preview
    }

    pub fn structure(&self) -> Option<ObjectId> {
        self.structure
    }

    pub fn is_structure_stale(&self) -> bool {
        self.structure_stale
    }

    pub fn inverted_available(&self) -> bool {
        self.library.has_inverted()
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &*self.scene
    }
}

impl<S: SceneLinker> Drop for TileBrushSession<'_, S> {
    fn drop(&mut self) {
        self.teardown(SessionState::Cancelled);
    }
}

fn preview_transform(pose: &PreviewPose) -> TileTransform {
    TileTransform::new(pose.position, pose.orientation.euler())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::scene::{MemoryScene, ProceduralTileAssets};

    fn start(scene: &mut MemoryScene) -> TileBrushSession<'_, MemoryScene> {
        TileBrushSession::invoke(BrushConfig::default(), &ProceduralTileAssets::new(), scene, Vec3::ZERO)
            .unwrap()
    }

    #[test]
    fn test_invoke_snaps_start() {
        let mut scene = MemoryScene::new();
        let session = TileBrushSession::invoke(
            BrushConfig::default(),
            &ProceduralTileAssets::new(),
            &mut scene,
            Vec3::new(0.3, 0.8, 1.1),
        )
        .unwrap();
        assert_eq!(session.pose().position, Vec3::new(0.5, 1.0, 1.0));
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_repeat_commit_is_suppressed() {
        let mut scene = MemoryScene::new();
        let mut session = start(&mut scene);
        session.commit().unwrap();
        assert!(matches!(session.commit(), Err(BrushError::Occupied { .. })));
        assert_eq!(session.undo_depth(), 1);
    }

    #[test]
    fn test_auto_mode_restores_speed() {
        let mut scene = MemoryScene::new();
        let mut session = start(&mut scene);
        session.toggle_speed().unwrap();
        session.toggle_speed().unwrap();
        assert!(session.toggle_auto());
        assert_eq!(session.speed(), SpeedMode::Fast);
        assert!(matches!(session.toggle_speed(), Err(BrushError::SpeedLocked)));
        assert!(!session.toggle_auto());
        assert_eq!(session.speed(), SpeedMode::Normal);
    }

    #[test]
    fn test_drop_removes_preview_only() {
        let mut scene = MemoryScene::new();
        {
            let mut session = start(&mut scene);
            session.commit().unwrap();
        }
        assert!(scene.objects_named(PREVIEW_NAME).is_empty());
        assert_eq!(scene.objects_named(STRUCTURE_NAME).len(), 1);
    }

    #[test]
    fn test_apply_reports_exit() {
        let mut scene = MemoryScene::new();
        let mut session = start(&mut scene);
        assert_eq!(session.apply(BrushIntent::Commit).unwrap(), SessionFlow::Continue);
        assert_eq!(session.apply(BrushIntent::Finish).unwrap(), SessionFlow::Finish);
        let summary = session.finish();
        assert_eq!(summary.state, SessionState::Finished);
        assert_eq!(summary.tiles, 1);
    }
}
