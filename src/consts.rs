//! Shared numeric constants for the puzzle core.

// ── Board geometry ──────────────────────────────────────────────

/// Edge length of one square fragment, in board pixels.
pub const PIECE_SIZE: f64 = 120.0;

/// Maximum distance (exclusive) between a released fragment and its ideal
/// position for a snap to trigger, in board pixels.
pub const SNAP_THRESHOLD: f64 = 80.0;

// ── Puzzle layout ───────────────────────────────────────────────

/// Number of distinct puzzle sets on the board.
pub const PUZZLE_SET_COUNT: u8 = 10;

/// Number of fragments (slots) per puzzle set.
pub const SLOTS_PER_SET: u8 = 4;

/// Total number of pieces the spawn pool can ever produce.
pub const TOTAL_PIECES: usize = PUZZLE_SET_COUNT as usize * SLOTS_PER_SET as usize;

/// Unrotated grid offset of each slot: a single row, left to right.
pub const SLOT_OFFSETS: [(i32, i32); SLOTS_PER_SET as usize] = [(0, 0), (1, 0), (2, 0), (3, 0)];

// ── Spawning ────────────────────────────────────────────────────

/// Left margin of the spawn area.
pub const SPAWN_MARGIN_LEFT: f64 = 50.0;

/// Horizontal space reserved outside the spawn area (left margin plus right gutter).
pub const SPAWN_RESERVED_X: f64 = 200.0;

/// Top margin of the spawn area, below the header.
pub const SPAWN_MARGIN_TOP: f64 = 150.0;

/// Vertical space reserved outside the spawn area (header plus bottom gutter).
pub const SPAWN_RESERVED_Y: f64 = 350.0;
