//! Status codes tab
//!
//! Legend of the recognized status vocabulary.

use crate::theme::{spacing, status_color};
use egui::{RichText, Sense, Ui, vec2};
use linkmon_model::{RECOGNIZED_STATUSES, describe_status};

pub fn show(ui: &mut Ui, dark_mode: bool) {
    ui.label(
        RichText::new(format!(
            "{} Status Codes",
            egui_phosphor::regular::INFO
        ))
        .strong()
        .size(18.0),
    );
    ui.add_space(spacing::XS);
    ui.label(RichText::new("Labels the checker assigns to each URL").weak());
    ui.add_space(spacing::MD);

    egui::Grid::new("status_legend")
        .num_columns(3)
        .spacing([spacing::MD, spacing::SM])
        .show(ui, |ui| {
            for status in RECOGNIZED_STATUSES {
                let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, status_color(status, dark_mode));
                ui.label(RichText::new(status).monospace());
                ui.label(
                    RichText::new(describe_status(status).unwrap_or_default()).weak(),
                );
                ui.end_row();
            }
        });
}
