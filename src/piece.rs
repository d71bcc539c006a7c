//! Piece model: one placed fragment of a 1×4 strip puzzle.
//!
//! A `Piece` carries its identity within the puzzle (`puzzle_set`, `slot`),
//! its board transform (`position`, `rotation`), and an optional cluster tag
//! (`group_id`). Clusters are implicit: every piece sharing a `group_id`
//! belongs to the same rigid body.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rotation};

/// Unique identifier for a piece.
pub type PieceId = Uuid;

/// Identifier for a cluster. Always the id of the piece that founded it.
pub type GroupId = Uuid;

/// A placed puzzle fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Unique identifier, stable for the piece's lifetime.
    pub id: PieceId,
    /// Which puzzle set (0..=9) this fragment belongs to.
    pub puzzle_set: u8,
    /// Linear position (0..=3) within the puzzle set.
    pub slot: u8,
    /// Board-relative position.
    pub position: Point,
    /// Orientation in quarter turns.
    pub rotation: Rotation,
    /// Cluster tag; `None` means the piece moves alone.
    pub group_id: Option<GroupId>,
}

impl Piece {
    /// Create an ungrouped piece with a fresh id.
    #[must_use]
    pub fn new(puzzle_set: u8, slot: u8, position: Point, rotation: Rotation) -> Self {
        Self {
            id: Uuid::new_v4(),
            puzzle_set,
            slot,
            position,
            rotation,
            group_id: None,
        }
    }

    /// Whether `other` moves with this piece: same id, or same non-null group.
    #[must_use]
    pub fn same_cluster(&self, other: &Piece) -> bool {
        if self.id == other.id {
            return true;
        }
        match (self.group_id, other.group_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// The group this piece would hand to a merge: its tag, or its own id.
    #[must_use]
    pub fn group_or_self(&self) -> GroupId {
        self.group_id.unwrap_or(self.id)
    }
}
