//! Group model: clusters of pieces that move and rotate as one rigid body.
//!
//! DESIGN
//! ======
//! Clustering is implicit. Pieces sharing a non-null `group_id` form one
//! cluster, and an ungrouped piece is a cluster of one. Every operation here
//! is pure: it borrows the current collection and returns the next one, which
//! the caller commits to the store in a single step.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use crate::geom::{Point, Rotation};
use crate::piece::{GroupId, Piece, PieceId};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("piece not found: {0}")]
    UnknownPiece(PieceId),
    #[error("piece {0} is already part of the released cluster")]
    SelfMerge(PieceId),
}

// =============================================================================
// QUERIES
// =============================================================================

/// All pieces in the same cluster as `id`, in collection order.
///
/// Returns just the piece itself when it is ungrouped, and nothing when the
/// id is unknown.
#[must_use]
pub fn cluster_of(pieces: &[Piece], id: &PieceId) -> Vec<Piece> {
    let Some(anchor) = pieces.iter().find(|p| p.id == *id) else {
        return Vec::new();
    };
    pieces.iter().filter(|p| anchor.same_cluster(p)).cloned().collect()
}

/// Ids of the cluster containing `id`, in collection order.
#[must_use]
pub fn cluster_ids(pieces: &[Piece], id: &PieceId) -> Vec<PieceId> {
    cluster_of(pieces, id).iter().map(|p| p.id).collect()
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Shift every member by `(dx, dy)`. Rotation is untouched.
#[must_use]
pub fn translate(pieces: &[Piece], members: &[PieceId], dx: f64, dy: f64) -> Vec<Piece> {
    let delta = Point::new(dx, dy);
    pieces
        .iter()
        .map(|p| {
            if members.contains(&p.id) {
                Piece { position: p.position + delta, ..p.clone() }
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Rotate every member about `pivot` by `delta` and advance each member's
/// orientation by the same amount.
///
/// The pivot is the position of the piece the user interacted with, so a
/// cluster of one rotates in place.
#[must_use]
pub fn rotate_about_pivot(pieces: &[Piece], members: &[PieceId], pivot: Point, delta: Rotation) -> Vec<Piece> {
    pieces
        .iter()
        .map(|p| {
            if members.contains(&p.id) {
                Piece {
                    position: p.position.rotated_about(pivot, delta),
                    rotation: p.rotation.plus(delta),
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}

// =============================================================================
// MERGE
// =============================================================================

/// Merge the `released` cluster into the cluster of `target_id`.
///
/// The resulting group id is the target's existing `group_id`, or the target's
/// own id if it was ungrouped. Every released member, the target, and every
/// piece already tagged with the target's prior group receive that id.
///
/// # Errors
///
/// Returns `UnknownPiece` if the target is missing and `SelfMerge` if the
/// target belongs to the released cluster.
pub fn merge(pieces: &[Piece], released: &[PieceId], target_id: &PieceId) -> Result<(Vec<Piece>, GroupId), GroupError> {
    let target = pieces
        .iter()
        .find(|p| p.id == *target_id)
        .ok_or(GroupError::UnknownPiece(*target_id))?;
    let group_id = target.group_or_self();
    let already_joined = pieces
        .iter()
        .any(|p| released.contains(&p.id) && p.group_id == Some(group_id));
    if released.contains(&target.id) || already_joined {
        return Err(GroupError::SelfMerge(target.id));
    }

    let next = pieces
        .iter()
        .map(|p| {
            let joins = released.contains(&p.id) || p.id == group_id || p.group_id == Some(group_id);
            if joins {
                Piece { group_id: Some(group_id), ..p.clone() }
            } else {
                p.clone()
            }
        })
        .collect();
    Ok((next, group_id))
}
