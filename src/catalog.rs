//! Catalog of the puzzle sets available on the board.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

/// Display metadata for one puzzle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PuzzleSet {
    pub id: u8,
    pub name: &'static str,
    /// CSS hex colour.
    pub color: &'static str,
}

/// Every puzzle set, indexed by id.
pub const PUZZLE_SETS: [PuzzleSet; 10] = [
    PuzzleSet { id: 0, name: "Ruby", color: "#ef4444" },
    PuzzleSet { id: 1, name: "Sapphire", color: "#3b82f6" },
    PuzzleSet { id: 2, name: "Emerald", color: "#22c55e" },
    PuzzleSet { id: 3, name: "Citrine", color: "#eab308" },
    PuzzleSet { id: 4, name: "Amethyst", color: "#a855f7" },
    PuzzleSet { id: 5, name: "Rose", color: "#ec4899" },
    PuzzleSet { id: 6, name: "Amber", color: "#f97316" },
    PuzzleSet { id: 7, name: "Sky", color: "#06b6d4" },
    PuzzleSet { id: 8, name: "Indigo", color: "#6366f1" },
    PuzzleSet { id: 9, name: "Teal", color: "#14b8a6" },
];

/// Look up a puzzle set by id.
#[must_use]
pub fn get(id: u8) -> Option<&'static PuzzleSet> {
    PUZZLE_SETS.get(usize::from(id))
}

/// Short label for a fragment, e.g. `R PT-2` for Ruby slot 1.
#[must_use]
pub fn fragment_label(puzzle_set: u8, slot: u8) -> String {
    let initial = get(puzzle_set).and_then(|s| s.name.chars().next()).unwrap_or('?');
    format!("{initial} PT-{}", u16::from(slot) + 1)
}
