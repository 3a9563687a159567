mod app;
mod config;
mod preview;
mod session;
mod ui;
mod worker;

use std::error::Error;

use crate::app::App;
use crate::config::AppConfig;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fauna Lens")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fauna Lens",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)?))),
    )?;

    Ok(())
}
