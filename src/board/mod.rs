//! Board model for the Tigris tile game

pub mod board;
pub mod tile;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use tile::Tile;

use rand::prelude::IndexedRandom;
use rand::Rng;
use thiserror::Error;

/// Default board dimensions (4x4)
pub const BOARD_ROWS: usize = 4;
pub const BOARD_COLS: usize = 4;

/// Resources a tile may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Temple,
    Market,
    Farm,
    Settlement,
    Treasure,
}

impl Resource {
    /// The closed set of resource kinds. Random draws pick from this
    /// array and nothing else.
    pub const ALL: [Resource; 5] = [
        Resource::Temple,
        Resource::Market,
        Resource::Farm,
        Resource::Settlement,
        Resource::Treasure,
    ];

    /// Display label for this kind
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Resource::Temple => "Temple",
            Resource::Market => "Market",
            Resource::Farm => "Farm",
            Resource::Settlement => "Settlement",
            Resource::Treasure => "Treasure",
        }
    }

    /// Draw one kind uniformly at random
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Resource {
        // ALL is non-empty, so choose cannot return None
        *Resource::ALL.choose(rng).unwrap_or(&Resource::Temple)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from board construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimensions must both be positive
    #[error("invalid board dimensions: {rows}x{cols} (rows and cols must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },
}
