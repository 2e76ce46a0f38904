mod app;
mod audio;
mod config;
mod dsp;
mod error;
mod ui;

use app::NoiseCab;
use eframe::{NativeOptions, egui};

fn main() {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "noisecab",
        options,
        Box::new(|cc| Ok(Box::new(NoiseCab::new(cc)))),
    )
    .expect("Failed to start application");
}
