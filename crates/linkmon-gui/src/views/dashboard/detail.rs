//! Detail panel
//!
//! Fields of the selected record plus its screenshot, if one was captured.
//! The selection survives filter changes (it is resolved by id against the
//! full collection), so this panel may show a record the table currently
//! hides.

use crate::state::DashboardState;
use crate::theme::{ThemeColors, spacing, status_color};
use egui::{RichText, Ui};

pub fn show(ui: &mut Ui, store: &DashboardState, theme: &ThemeColors) {
    let Some(record) = store.selected_record() else {
        ui.add_space(spacing::MD);
        ui.label(RichText::new("No record selected").weak());
        ui.label(
            RichText::new("Click a table row to inspect it")
                .weak()
                .small(),
        );
        return;
    };

    ui.add_space(spacing::SM);
    ui.heading("Record Detail");
    ui.add_space(spacing::MD);

    egui::Grid::new("record_detail")
        .num_columns(2)
        .spacing([spacing::MD, spacing::XS])
        .show(ui, |ui| {
            ui.label(RichText::new("ID").strong());
            ui.label(record.id.as_str());
            ui.end_row();

            ui.label(RichText::new("URL").strong());
            ui.label(&record.url);
            ui.end_row();

            ui.label(RichText::new("Status").strong());
            ui.label(
                RichText::new(&record.status).color(status_color(&record.status, ui.visuals().dark_mode)),
            );
            ui.end_row();

            ui.label(RichText::new("Last Checked").strong());
            ui.label(&record.last_checked);
            ui.end_row();

            ui.label(RichText::new("Log").strong());
            ui.label(&record.log);
            ui.end_row();
        });

    ui.add_space(spacing::MD);
    match &record.screenshot {
        Some(path) => {
            ui.label(
                RichText::new(format!("{} Screenshot", egui_phosphor::regular::IMAGE)).strong(),
            );
            ui.add_space(spacing::XS);
            ui.add(
                egui::Image::new(format!("file://{path}"))
                    .max_width(330.0)
                    .maintain_aspect_ratio(true),
            );
        }
        None => {
            ui.label(
                RichText::new("No screenshot available for this record").color(theme.error),
            );
        }
    }
}
