//! Gallery tab
//!
//! Screenshot cards for the records in the filtered view that have one.

use crate::state::DashboardState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use linkmon_model::Record;

const CARD_WIDTH: f32 = 240.0;
const CARD_IMAGE_HEIGHT: f32 = 150.0;
const COLUMNS: usize = 3;

pub fn show(ui: &mut Ui, store: &DashboardState) {
    let with_screenshots: Vec<&Record> = store
        .filtered_records()
        .filter(|record| record.has_screenshot())
        .collect();

    if with_screenshots.is_empty() {
        ui.add_space(spacing::LG);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No screenshots in the current view").weak());
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("screenshot_gallery")
            .num_columns(COLUMNS)
            .spacing([spacing::MD, spacing::MD])
            .show(ui, |ui| {
                for (idx, record) in with_screenshots.iter().enumerate() {
                    card(ui, record);
                    if (idx + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn card(ui: &mut Ui, record: &Record) {
    let Some(path) = &record.screenshot else {
        return;
    };

    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.add(
                egui::Image::new(format!("file://{path}"))
                    .fit_to_exact_size(egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT)),
            );
            ui.add_space(spacing::XS);
            ui.label(RichText::new(format!("ID {}", record.id)).strong());
            ui.label(RichText::new(&record.url).weak().small());
        });
    });
}
