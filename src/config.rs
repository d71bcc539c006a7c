//! Board configuration.
//!
//! DESIGN
//! ======
//! Values come from environment variables with compiled-in defaults. A
//! missing or unparsable variable falls back to its default, and
//! `validate` rejects values the geometry cannot work with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{PIECE_SIZE, SNAP_THRESHOLD};

const DEFAULT_BOARD_WIDTH: f64 = 1280.0;
const DEFAULT_BOARD_HEIGHT: f64 = 800.0;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

// =============================================================================
// CONFIG
// =============================================================================

/// Geometry and tuning for one board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Edge length of one fragment in board pixels.
    pub piece_size: f64,
    /// Snap distance (exclusive) in board pixels.
    pub snap_threshold: f64,
    /// Board width in pixels; bounds the spawn area.
    pub board_width: f64,
    /// Board height in pixels; bounds the spawn area.
    pub board_height: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            piece_size: PIECE_SIZE,
            snap_threshold: SNAP_THRESHOLD,
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Build a config from environment variables.
    ///
    /// - `STRIPSNAP_PIECE_SIZE` (default 120)
    /// - `STRIPSNAP_SNAP_THRESHOLD` (default 80)
    /// - `STRIPSNAP_BOARD_WIDTH` (default 1280)
    /// - `STRIPSNAP_BOARD_HEIGHT` (default 800)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            piece_size: env_parse("STRIPSNAP_PIECE_SIZE", defaults.piece_size),
            snap_threshold: env_parse("STRIPSNAP_SNAP_THRESHOLD", defaults.snap_threshold),
            board_width: env_parse("STRIPSNAP_BOARD_WIDTH", defaults.board_width),
            board_height: env_parse("STRIPSNAP_BOARD_HEIGHT", defaults.board_height),
        }
    }

    /// Check that every dimension is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns `NotPositive` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("piece_size", self.piece_size),
            ("snap_threshold", self.snap_threshold),
            ("board_width", self.board_width),
            ("board_height", self.board_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
