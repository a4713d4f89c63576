// Baseball Scheduling Application
// Main entry point

mod models;
mod services;
mod ui_egui;
mod utils;

use ui_egui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Baseball Scheduling");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Baseball Scheduling",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc)?))),
    )
}
