//! Link Monitor - Desktop dashboard application
//!
//! Visualizes URL health-check results from a processed report workbook:
//! filterable table, status charts, screenshot gallery, and a legend of
//! check-outcome labels.

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Link Monitor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Link Monitor",
        options,
        Box::new(|cc| Ok(Box::new(linkmon_gui::app::LinkMonApp::new(cc)))),
    )
}
