//! Board structure with random tile generation

use rand::Rng;

use super::{BoardError, Resource, Tile};

/// Fixed-size grid of tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Generate a board using the thread-local random source
    pub fn generate(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::generate_with(rows, cols, &mut rand::rng())
    }

    /// Generate a board from a caller-supplied random source.
    ///
    /// Cells are filled in row-major order: each draws a resource count
    /// uniformly from 1..=3, then that many kinds uniformly with
    /// replacement from [`Resource::ALL`]. Identically seeded sources
    /// produce identical boards.
    pub fn generate_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            let count = rng.random_range(1..=3);
            let resources = (0..count).map(|_| Resource::random(rng)).collect();
            tiles.push(Tile::new(resources));
        }

        Ok(Self { rows, cols, tiles })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles (rows * cols)
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Get the tile at (row, col)
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &Tile {
        assert!(row < self.rows && col < self.cols, "position out of bounds");
        &self.tiles[row * self.cols + col]
    }

    /// Iterate over tiles in row-major order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles carrying at least one Treasure
    pub fn treasure_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.has_treasure()).count()
    }
}
