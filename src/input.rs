//! Input model: pointer buttons and the drag-session state machine.
//!
//! A drag session starts on a primary pointer-down over a piece. It receives
//! zero or more moves and ends on pointer-up. `DragState` is the single
//! "currently dragging" token, so only one session can exist at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::piece::PieceId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging a piece and, with it, the piece's whole cluster.
    Dragging {
        /// Id of the piece under the pointer at drag start.
        id: PieceId,
        /// Pointer position minus piece position at drag start; kept so the
        /// piece does not jump to the pointer.
        grab_offset: Point,
    },
}

impl DragState {
    /// Id of the grabbed piece, if a drag is active.
    #[must_use]
    pub fn active_id(&self) -> Option<PieceId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some(*id),
        }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
