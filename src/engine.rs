//! Engine: turns pointer gestures into group and snap operations.
//!
//! DESIGN
//! ======
//! `EngineCore` owns the piece store, the drag session, and the board config.
//! Each handler runs synchronously, builds the next collection from the
//! current one, and commits it in one step. It then returns the `Action`s a
//! host needs to re-render or mirror the change.
//!
//! Invalid input is never an error here. Unknown ids, moves without a drag,
//! a second drag-start, and non-primary buttons are ignored and return no
//! actions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{BoardConfig, ConfigError};
use crate::consts::{PUZZLE_SET_COUNT, SLOTS_PER_SET};
use crate::geom::{Point, Rotation};
use crate::group::{cluster_ids, cluster_of, merge, rotate_about_pivot, translate};
use crate::input::{Button, DragState};
use crate::piece::{GroupId, Piece, PieceId};
use crate::snap::find_snap;
use crate::spawn::{self, SpawnError};
use crate::store::PieceStore;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    PieceSpawned { piece: Piece },
    ClusterRaised { ids: Vec<PieceId> },
    ClusterMoved { ids: Vec<PieceId>, dx: f64, dy: f64 },
    ClusterRotated { ids: Vec<PieceId>, pivot: Point, rotation: Rotation },
    Snapped { group_id: GroupId, target_id: PieceId, members: Vec<PieceId>, displacement: Point },
    RenderNeeded,
}

/// Core engine state: everything between raw pointer input and the renderer.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub store: PieceStore,
    pub drag: DragState,
    pub config: BoardConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty board with custom geometry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails [`BoardConfig::validate`].
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    // --- Data inputs ---

    /// Replace the whole collection, e.g. from a host snapshot.
    pub fn load_snapshot(&mut self, pieces: Vec<Piece>) {
        self.store.load_snapshot(pieces);
    }

    /// Place the piece for `(puzzle_set, slot)` at an explicit transform.
    ///
    /// # Errors
    ///
    /// Propagates the spawn pool's range and uniqueness checks.
    pub fn spawn_piece(
        &mut self,
        puzzle_set: u8,
        slot: u8,
        position: Point,
        rotation: Rotation,
    ) -> Result<Action, SpawnError> {
        let piece = spawn::spawn(self.store.pieces(), puzzle_set, slot, position, rotation)?;
        Ok(self.place(piece))
    }

    /// Place a random remaining variant somewhere in the spawn area.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` once every variant is on the board.
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Action, SpawnError> {
        let piece = spawn::spawn_random(self.store.pieces(), rng, &self.config)?;
        Ok(self.place(piece))
    }

    fn place(&mut self, piece: Piece) -> Action {
        info!(
            id = %piece.id,
            puzzle_set = piece.puzzle_set,
            slot = piece.slot,
            rotation = piece.rotation.degrees(),
            "piece spawned"
        );
        self.store.insert(piece.clone());
        Action::PieceSpawned { piece }
    }

    // --- Pointer input ---

    /// Begin dragging `id` and its cluster from `point`.
    pub fn on_drag_start(&mut self, id: &PieceId, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            debug!(?button, "drag start ignored: non-primary button");
            return Vec::new();
        }
        if self.drag.is_active() {
            debug!(%id, "drag start ignored: drag already active");
            return Vec::new();
        }
        let Some(piece) = self.store.get(id) else {
            debug!(%id, "drag start ignored: unknown piece");
            return Vec::new();
        };

        let grab_offset = point - piece.position;
        let ids = cluster_ids(self.store.pieces(), id);
        self.store.raise(&ids);
        self.drag = DragState::Dragging { id: *id, grab_offset };
        debug!(%id, members = ids.len(), "drag started");

        vec![Action::ClusterRaised { ids }, Action::RenderNeeded]
    }

    /// Move the dragged cluster so the grabbed piece follows the pointer.
    pub fn on_drag_move(&mut self, point: Point) -> Vec<Action> {
        let DragState::Dragging { id, grab_offset } = self.drag else {
            return Vec::new();
        };
        let Some(active) = self.store.get(&id) else {
            return Vec::new();
        };

        let delta = (point - grab_offset) - active.position;
        if delta == Point::default() {
            return Vec::new();
        }
        let ids = cluster_ids(self.store.pieces(), &id);
        let next = translate(self.store.pieces(), &ids, delta.x, delta.y);
        self.store.commit(next);

        vec![Action::ClusterMoved { ids, dx: delta.x, dy: delta.y }, Action::RenderNeeded]
    }

    /// End the drag session and snap the released cluster if it landed next
    /// to a compatible piece.
    pub fn on_drag_end(&mut self) -> Vec<Action> {
        let DragState::Dragging { id, .. } = std::mem::take(&mut self.drag) else {
            return Vec::new();
        };
        if !self.store.contains(&id) {
            debug!(%id, "drag end: grabbed piece no longer present");
            return Vec::new();
        }

        let mut released = cluster_of(self.store.pieces(), &id);
        released.sort_by_key(|p| p.id != id);
        let Some(snap) = find_snap(&released, self.store.pieces(), self.config.piece_size, self.config.snap_threshold)
        else {
            debug!(%id, "drag end: no snap target in range");
            return Vec::new();
        };

        let ids: Vec<PieceId> = released.iter().map(|p| p.id).collect();
        let moved = translate(self.store.pieces(), &ids, snap.displacement.x, snap.displacement.y);
        let (next, group_id) = match merge(&moved, &ids, &snap.target_id) {
            Ok(merged) => merged,
            Err(e) => {
                warn!(error = %e, %id, "drag end: merge rejected");
                return Vec::new();
            }
        };
        self.store.commit(next);
        info!(
            %id,
            target = %snap.target_id,
            group = %group_id,
            distance = snap.distance,
            members = ids.len(),
            "cluster snapped"
        );

        vec![
            Action::Snapped {
                group_id,
                target_id: snap.target_id,
                members: ids,
                displacement: snap.displacement,
            },
            Action::RenderNeeded,
        ]
    }

    /// Rotate the cluster of `id` a quarter turn about the piece's own position.
    pub fn on_rotate_request(&mut self, id: &PieceId) -> Vec<Action> {
        let Some(piece) = self.store.get(id) else {
            debug!(%id, "rotate ignored: unknown piece");
            return Vec::new();
        };
        let pivot = piece.position;
        let rotation = piece.rotation.plus(Rotation::Deg90);
        let ids = cluster_ids(self.store.pieces(), id);
        let next = rotate_about_pivot(self.store.pieces(), &ids, pivot, Rotation::Deg90);
        self.store.commit(next);
        debug!(%id, rotation = rotation.degrees(), members = ids.len(), "cluster rotated");

        vec![Action::ClusterRotated { ids, pivot, rotation }, Action::RenderNeeded]
    }

    // --- Queries ---

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: &PieceId) -> Option<&Piece> {
        self.store.get(id)
    }

    /// All pieces in paint order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        self.store.pieces()
    }

    /// The piece currently under the pointer, if a drag is active.
    #[must_use]
    pub fn dragging_id(&self) -> Option<PieceId> {
        self.drag.active_id()
    }

    /// Whether `id` moves with the active drag.
    #[must_use]
    pub fn is_dragging(&self, id: &PieceId) -> bool {
        let Some(active) = self.drag.active_id().and_then(|a| self.store.get(&a)) else {
            return false;
        };
        self.store.get(id).is_some_and(|p| active.same_cluster(p))
    }

    /// Number of committed collection replacements so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Whether every piece variant has been spawned.
    #[must_use]
    pub fn is_pool_exhausted(&self) -> bool {
        spawn::is_exhausted(self.store.pieces())
    }

    /// Number of piece variants on the board.
    #[must_use]
    pub fn spawned_count(&self) -> usize {
        spawn::spawned_count(self.store.pieces())
    }

    /// Puzzle sets whose every slot is on the board in a single cluster.
    #[must_use]
    pub fn completed_sets(&self) -> Vec<u8> {
        (0..PUZZLE_SET_COUNT)
            .filter(|&set| {
                let members: Vec<&Piece> = self.store.pieces().iter().filter(|p| p.puzzle_set == set).collect();
                let Some(first) = members.first() else {
                    return false;
                };
                members.len() == usize::from(SLOTS_PER_SET)
                    && first.group_id.is_some()
                    && members.iter().all(|p| p.group_id == first.group_id)
            })
            .collect()
    }
}
