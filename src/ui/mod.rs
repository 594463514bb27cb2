//! GUI module for the Tigris board viewer
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::TigrisApp;
