//! Spawn pool: the fixed set of fragment variants that can be placed.
//!
//! DESIGN
//! ======
//! The pool holds no state of its own. What remains to be spawned is derived
//! from the pieces already on the board, so the pool can never disagree with
//! the store about which `(puzzle_set, slot)` pairs exist.

#[cfg(test)]
#[path = "spawn_test.rs"]
mod spawn_test;

use rand::Rng;

use crate::config::BoardConfig;
use crate::consts::{
    PUZZLE_SET_COUNT, SLOTS_PER_SET, SPAWN_MARGIN_LEFT, SPAWN_MARGIN_TOP, SPAWN_RESERVED_X, SPAWN_RESERVED_Y,
    TOTAL_PIECES,
};
use crate::geom::{Point, Rotation};
use crate::piece::Piece;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("invalid puzzle set: {0}")]
    InvalidPuzzleSet(u8),
    #[error("invalid slot: {0}")]
    InvalidSlot(u8),
    #[error("piece already spawned: set {puzzle_set} slot {slot}")]
    AlreadySpawned { puzzle_set: u8, slot: u8 },
    #[error("spawn pool exhausted")]
    Exhausted,
}

// =============================================================================
// POOL QUERIES
// =============================================================================

/// `(puzzle_set, slot)` pairs not yet on the board, in set-major order.
#[must_use]
pub fn available(pieces: &[Piece]) -> Vec<(u8, u8)> {
    (0..PUZZLE_SET_COUNT)
        .flat_map(|set| (0..SLOTS_PER_SET).map(move |slot| (set, slot)))
        .filter(|&(set, slot)| !is_spawned(pieces, set, slot))
        .collect()
}

/// Whether a piece for `(puzzle_set, slot)` is already on the board.
#[must_use]
pub fn is_spawned(pieces: &[Piece], puzzle_set: u8, slot: u8) -> bool {
    pieces.iter().any(|p| p.puzzle_set == puzzle_set && p.slot == slot)
}

/// Number of distinct variants already on the board.
#[must_use]
pub fn spawned_count(pieces: &[Piece]) -> usize {
    TOTAL_PIECES - available(pieces).len()
}

/// Whether every variant has been spawned.
#[must_use]
pub fn is_exhausted(pieces: &[Piece]) -> bool {
    available(pieces).is_empty()
}

// =============================================================================
// SPAWN
// =============================================================================

/// Create the piece for `(puzzle_set, slot)` at an explicit transform.
///
/// # Errors
///
/// Returns `InvalidPuzzleSet` / `InvalidSlot` for out-of-range ids and
/// `AlreadySpawned` if that variant is already on the board.
pub fn spawn(
    pieces: &[Piece],
    puzzle_set: u8,
    slot: u8,
    position: Point,
    rotation: Rotation,
) -> Result<Piece, SpawnError> {
    if puzzle_set >= PUZZLE_SET_COUNT {
        return Err(SpawnError::InvalidPuzzleSet(puzzle_set));
    }
    if slot >= SLOTS_PER_SET {
        return Err(SpawnError::InvalidSlot(slot));
    }
    if is_spawned(pieces, puzzle_set, slot) {
        return Err(SpawnError::AlreadySpawned { puzzle_set, slot });
    }
    Ok(Piece::new(puzzle_set, slot, position, rotation))
}

/// Create a uniformly random remaining variant at a random position inside
/// the spawn area, with a random orientation.
///
/// # Errors
///
/// Returns `Exhausted` when no variant remains.
pub fn spawn_random<R: Rng + ?Sized>(pieces: &[Piece], rng: &mut R, config: &BoardConfig) -> Result<Piece, SpawnError> {
    let pool = available(pieces);
    if pool.is_empty() {
        return Err(SpawnError::Exhausted);
    }
    let (puzzle_set, slot) = pool[rng.random_range(0..pool.len())];
    let position = random_position(rng, config);
    let rotation = Rotation::ALL[rng.random_range(0..Rotation::ALL.len())];
    spawn(pieces, puzzle_set, slot, position, rotation)
}

/// Random point in the spawn area. Each span is clamped at zero so a tiny
/// board still spawns at the margin.
fn random_position<R: Rng + ?Sized>(rng: &mut R, config: &BoardConfig) -> Point {
    let span_x = (config.board_width - SPAWN_RESERVED_X).max(0.0);
    let span_y = (config.board_height - SPAWN_RESERVED_Y).max(0.0);
    Point::new(
        SPAWN_MARGIN_LEFT + rng.random::<f64>() * span_x,
        SPAWN_MARGIN_TOP + rng.random::<f64>() * span_y,
    )
}
