//! Tigris and Euphrates board viewer
//!
//! Generates a random board for a "Tigris and Euphrates"-style tile game
//! and renders it as a static grid in a native window:
//! - 4x4 board by default
//! - Each tile holds 1-3 randomly drawn resources (duplicates allowed)
//! - Five resource kinds: Temple, Market, Farm, Settlement, Treasure
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//! - [`board`]: Data-only board model and random generation
//! - [`ui`]: egui/eframe presentation layer consuming a completed board
//!
//! Generation is independent of the GUI, so the board core can be built
//! and tested without a display environment.
//!
//! # Quick Start
//!
//! ```
//! use tigris::Board;
//!
//! let board = Board::generate(4, 4).unwrap();
//! assert_eq!(board.tile_count(), 16);
//!
//! for tile in board.iter() {
//!     assert!((1..=3).contains(&tile.resources().len()));
//! }
//! ```

pub mod board;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Resource, Tile, BOARD_COLS, BOARD_ROWS};
