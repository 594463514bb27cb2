//! Main application for the Tigris GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};

use crate::board::Board;

use super::board_view::BoardView;
use super::theme::*;

/// Main Tigris application: a static render of one generated board
pub struct TigrisApp {
    board: Board,
    board_view: BoardView,
}

impl TigrisApp {
    /// Create the app around an already-generated board
    pub fn new(_cc: &eframe::CreationContext<'_>, board: Board) -> Self {
        Self {
            board,
            board_view: BoardView::default(),
        }
    }

    /// Render the title strip with board summary
    fn render_header(&self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("TIGRIS AND EUPHRATES")
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!(
                            "{}x{} board - {} treasure tiles",
                            self.board.rows(),
                            self.board.cols(),
                            self.board.treasure_count()
                        ))
                        .size(12.0)
                        .color(TEXT_MUTED),
                    );
                });
            });
            ui.add_space(6.0);
        });
    }

    /// Render the tile grid
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                self.board_view.show(ui, &self.board);
            });
    }
}

impl eframe::App for TigrisApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Static scene: nothing mutates after startup, no repaint needed
        self.render_header(ctx);
        self.render_board(ctx);
    }
}
