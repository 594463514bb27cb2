//! Tile structure holding a drawn resource sequence

use super::Resource;

/// A single board cell's contents: 1-3 resources in draw order,
/// duplicates allowed. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    resources: Vec<Resource>,
}

impl Tile {
    pub fn new(resources: Vec<Resource>) -> Self {
        debug_assert!(
            (1..=3).contains(&resources.len()),
            "tile must hold 1-3 resources"
        );
        Self { resources }
    }

    /// Resources in draw order
    #[inline]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Check if any resource on this tile is a Treasure
    #[inline]
    pub fn has_treasure(&self) -> bool {
        self.resources.contains(&Resource::Treasure)
    }
}

impl std::fmt::Display for Tile {
    /// Comma-joined resource labels, e.g. "Temple, Farm"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, res) in self.resources.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(res.label())?;
        }
        Ok(())
    }
}
