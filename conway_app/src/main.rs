// main.rs - Conway's Game of Life with a rainbow-tinted egui front-end

use clap::Parser;
use eframe::egui;
use log::debug;

mod app;       // Tick-driven app state
mod settings;  // Command-line options
mod ui;        // eframe::App impl

use app::GameOfLifeApp;
use settings::{Args, Settings};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let settings = Settings::from(Args::parse());
    debug!("{settings:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 750.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLifeApp::new(&settings))),
    )
}
