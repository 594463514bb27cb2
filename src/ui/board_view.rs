//! Board rendering for the Tigris GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Tile};

use super::theme::*;

/// Board view paints the grid of tile cells
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: Vec2,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: Vec2::new(120.0, 60.0),
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board as a static row-major grid of labeled cells
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board) {
        let available_size = ui.available_size();

        // Split the available area evenly into fixed-size cells
        let rows = board.rows() as f32;
        let cols = board.cols() as f32;
        self.cell_size = Vec2::new(
            (available_size.x - 2.0 * BOARD_MARGIN - (cols - 1.0) * CELL_GAP) / cols,
            (available_size.y - 2.0 * BOARD_MARGIN - (rows - 1.0) * CELL_GAP) / rows,
        );

        let (response, painter) = ui.allocate_painter(available_size, Sense::hover());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, PANEL_BG);

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                self.draw_cell(&painter, row, col, board.get(row, col));
            }
        }
    }

    /// Draw a single tile cell with its resource labels
    fn draw_cell(&self, painter: &Painter, row: usize, col: usize, tile: &Tile) {
        let rect = self.cell_rect(row, col);

        let (fill, border) = if tile.has_treasure() {
            (TREASURE_BG, TREASURE_BORDER)
        } else {
            (CELL_BG, CELL_BORDER)
        };

        // Raised-label look: drop shadow, fill, top-left highlight edge
        painter.rect_filled(
            rect.translate(Vec2::new(2.0, 2.0)),
            CornerRadius::same(CELL_CORNER_RADIUS),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.rect_filled(rect, CornerRadius::same(CELL_CORNER_RADIUS), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(CELL_CORNER_RADIUS),
            Stroke::new(CELL_BORDER_WIDTH, border),
            egui::StrokeKind::Inside,
        );
        painter.line_segment(
            [
                rect.left_top() + Vec2::new(CELL_BORDER_WIDTH, CELL_BORDER_WIDTH),
                rect.right_top() + Vec2::new(-CELL_BORDER_WIDTH, CELL_BORDER_WIDTH),
            ],
            Stroke::new(1.0, CELL_HIGHLIGHT),
        );

        self.draw_resource_labels(painter, rect, tile);
    }

    /// Draw the tile's resources, one label per line, centered in the cell
    fn draw_resource_labels(&self, painter: &Painter, rect: Rect, tile: &Tile) {
        let font = egui::FontId::proportional(CELL_TEXT_SIZE);
        let resources = tile.resources();

        let total_height = resources.len() as f32 * CELL_LINE_SPACING;
        let top = rect.center().y - total_height / 2.0 + CELL_LINE_SPACING / 2.0;

        for (i, res) in resources.iter().enumerate() {
            let pos = Pos2::new(rect.center().x, top + i as f32 * CELL_LINE_SPACING);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                res.label(),
                font.clone(),
                CELL_TEXT,
            );
        }
    }

    /// Screen rectangle for the cell at (row, col)
    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + col as f32 * (self.cell_size.x + CELL_GAP),
                BOARD_MARGIN + row as f32 * (self.cell_size.y + CELL_GAP),
            );
        Rect::from_min_size(min, self.cell_size)
    }
}
