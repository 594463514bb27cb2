//! Theme constants for the board viewer

use egui::Color32;

// Background behind the grid
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);

// Cell colors - raised-label look
pub const CELL_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const CELL_BORDER: Color32 = Color32::from_rgb(139, 90, 43); // Saddle brown
pub const CELL_HIGHLIGHT: Color32 = Color32::from_rgb(240, 210, 170);

// Treasure tiles get a warmer tint
pub const TREASURE_BG: Color32 = Color32::from_rgb(235, 200, 110);
pub const TREASURE_BORDER: Color32 = Color32::from_rgb(170, 120, 30);

// Text
pub const CELL_TEXT: Color32 = Color32::from_rgb(60, 40, 20);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 6.0;
pub const CELL_CORNER_RADIUS: u8 = 4;
pub const CELL_BORDER_WIDTH: f32 = 2.0;
pub const CELL_TEXT_SIZE: f32 = 13.0;
pub const CELL_LINE_SPACING: f32 = 16.0;
