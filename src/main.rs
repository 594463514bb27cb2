//! Tigris and Euphrates board viewer GUI
//!
//! Generates one random 4x4 board and displays it in a window.

use log::info;

use tigris::ui::TigrisApp;
use tigris::{Board, BOARD_COLS, BOARD_ROWS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let board = Board::generate(BOARD_ROWS, BOARD_COLS)?;
    info!(
        "generated {}x{} board, {} tiles with treasure",
        board.rows(),
        board.cols(),
        board.treasure_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Tigris and Euphrates"),
        ..Default::default()
    };

    eframe::run_native(
        "Tigris and Euphrates",
        options,
        Box::new(move |cc| Ok(Box::new(TigrisApp::new(cc, board)))),
    )?;

    Ok(())
}
