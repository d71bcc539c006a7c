//! Grouping and snapping core for a drag-and-drop strip puzzle.
//!
//! Pieces are fragments of ten 1×4 strip puzzles scattered over a board. A
//! piece can be dragged alone or together with the cluster it has snapped
//! into. It rotates in quarter turns, and it snaps onto a compatible
//! neighbour when released close to the spot where it belongs. The host
//! (browser shell, CLI, test harness) feeds board-relative pointer
//! coordinates into [`engine::EngineCore`] and renders from the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pointer handlers and queries over the board |
//! | [`group`] | Cluster queries, rigid-body transforms, and merging |
//! | [`snap`] | Closest-valid-placement search on release |
//! | [`store`] | Paint-ordered piece collection with whole-collection commits |
//! | [`piece`] | Piece record and id types |
//! | [`geom`] | Points and exact quarter-turn rotation |
//! | [`input`] | Pointer buttons and the drag-session state machine |
//! | [`spawn`] | Pool of spawnable fragment variants |
//! | [`catalog`] | Names and colours of the puzzle sets |
//! | [`config`] | Board configuration from the environment |
//! | [`consts`] | Shared numeric constants (piece size, snap threshold, slot offsets) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod group;
pub mod input;
pub mod piece;
pub mod snap;
pub mod spawn;
pub mod store;
