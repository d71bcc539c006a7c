//! Snap resolver: decides whether a released cluster should join another.
//!
//! DESIGN
//! ======
//! Every (released member, candidate target) pair is scored by how far the
//! member sits from the spot it would occupy if it were correctly assembled
//! next to the target. The single closest pair under the threshold wins.
//! Matching per member, instead of only the grabbed piece, lets a multi-piece
//! cluster attach through whichever of its members is nearest.
//!
//! Ideal offsets come from integer slot offsets rotated with exact
//! quarter-turn matrices, so axis-aligned placements never accumulate
//! floating-point drift.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::consts::SLOT_OFFSETS;
use crate::geom::{Point, Rotation};
use crate::piece::{GroupId, Piece, PieceId};

/// The winning pairing found by [`find_snap`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapMatch {
    /// The released member whose placement decided the snap.
    pub member_id: PieceId,
    /// The piece it snapped against.
    pub target_id: PieceId,
    /// Correction to apply to every released member.
    pub displacement: Point,
    /// Distance between the member and its ideal position before correction.
    pub distance: f64,
    /// Group id the merged cluster will carry.
    pub group_id: GroupId,
}

/// Unrotated grid offset for a slot. Out-of-range slots sit at the origin.
fn slot_offset(slot: u8) -> Point {
    let (x, y) = SLOT_OFFSETS.get(usize::from(slot)).copied().unwrap_or((0, 0));
    Point::new(f64::from(x), f64::from(y))
}

/// Pixel offset from a target in `target_slot` to a correctly placed piece
/// in `released_slot`, both oriented by `rotation`.
#[must_use]
pub fn ideal_offset(released_slot: u8, target_slot: u8, rotation: Rotation, piece_size: f64) -> Point {
    let grid = slot_offset(released_slot) - slot_offset(target_slot);
    grid.rotated(rotation).scaled(piece_size)
}

/// Where `member` must sit to be assembled against `target`.
#[must_use]
pub fn ideal_position(member: &Piece, target: &Piece, piece_size: f64) -> Point {
    target.position + ideal_offset(member.slot, target.slot, target.rotation, piece_size)
}

/// Find the closest valid placement of any `released` member against any
/// other piece of the same puzzle set and orientation.
///
/// `released` must be the dragged cluster with the grabbed piece first. Its
/// puzzle set and rotation define which targets qualify. Pieces listed in
/// `released` are never candidates. Only a distance strictly below
/// `threshold` counts. The first pair found wins a tie.
#[must_use]
pub fn find_snap(released: &[Piece], pieces: &[Piece], piece_size: f64, threshold: f64) -> Option<SnapMatch> {
    let lead = released.first()?;
    let candidates: Vec<&Piece> = pieces
        .iter()
        .filter(|p| {
            p.puzzle_set == lead.puzzle_set
                && p.rotation == lead.rotation
                && !released.iter().any(|r| r.id == p.id)
        })
        .collect();

    let mut best: Option<SnapMatch> = None;
    let mut best_distance = threshold;
    for member in released {
        for target in &candidates {
            let ideal = ideal_position(member, target, piece_size);
            let distance = member.position.distance(ideal);
            if distance < best_distance {
                best_distance = distance;
                best = Some(SnapMatch {
                    member_id: member.id,
                    target_id: target.id,
                    displacement: ideal - member.position,
                    distance,
                    group_id: target.group_or_self(),
                });
            }
        }
    }
    best
}
