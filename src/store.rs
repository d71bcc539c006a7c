//! Piece store: the single owned collection of pieces on the board.
//!
//! The store is an ordered arena. Collection order is paint order (the last
//! piece is drawn on top), and it is also the iteration order the snap
//! resolver uses when it breaks ties.
//!
//! Every mutation replaces the whole collection in one step via [`PieceStore::commit`].
//! Callers build the next collection from a borrowed view of the current one,
//! so a reader never observes a half-applied update. Each commit bumps
//! `revision` so a renderer can tell whether anything changed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::piece::{Piece, PieceId};

/// In-memory, paint-ordered collection of pieces.
#[derive(Debug, Clone, Default)]
pub struct PieceStore {
    pieces: Vec<Piece>,
    revision: u64,
}

impl PieceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All pieces in paint order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Return a reference to a piece by id.
    #[must_use]
    pub fn get(&self, id: &PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == *id)
    }

    /// Whether a piece with this id is present.
    #[must_use]
    pub fn contains(&self, id: &PieceId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole collection with `next`.
    pub fn commit(&mut self, next: Vec<Piece>) {
        self.pieces = next;
        self.revision += 1;
    }

    /// Add a piece on top of the paint order. A piece with the same id is replaced
    /// and moved to the top.
    pub fn insert(&mut self, piece: Piece) {
        let mut next: Vec<Piece> = self.pieces.iter().filter(|p| p.id != piece.id).cloned().collect();
        next.push(piece);
        self.commit(next);
    }

    /// Replace all pieces with a full snapshot.
    pub fn load_snapshot(&mut self, pieces: Vec<Piece>) {
        self.commit(pieces);
    }

    /// Move `ids` to the top of the paint order, keeping relative order within
    /// both the raised and the remaining pieces. No-op if none of the ids are present.
    pub fn raise(&mut self, ids: &[PieceId]) -> bool {
        let (raised, others): (Vec<Piece>, Vec<Piece>) =
            self.pieces.iter().cloned().partition(|p| ids.contains(&p.id));
        if raised.is_empty() {
            return false;
        }
        let mut next = others;
        next.extend(raised);
        self.commit(next);
        true
    }

    /// Number of committed replacements since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of pieces currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if the store contains no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
