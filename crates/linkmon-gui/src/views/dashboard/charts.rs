//! Charts tab
//!
//! Status distribution over the full dataset (not the filtered view): a
//! bar chart plus a color-keyed count list.

use crate::state::DashboardState;
use crate::theme::{spacing, status_color};
use egui::{RichText, Sense, Ui, vec2};
use egui_plot::{Bar, BarChart, Plot};

pub fn show(ui: &mut Ui, store: &DashboardState, dark_mode: bool) {
    let counts = store.status_counts();
    if counts.is_empty() {
        ui.add_space(spacing::LG);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No data loaded").weak());
        });
        return;
    }

    let labels: Vec<String> = counts.iter().map(|entry| short_label(&entry.status)).collect();

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            Bar::new(idx as f64, entry.count as f64)
                .name(&entry.status)
                .width(0.6)
                .fill(status_color(&entry.status, dark_mode))
        })
        .collect();

    Plot::new("status_distribution")
        .height(320.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as usize;
            if mark.value.fract().abs() < f64::EPSILON && idx < labels.len() {
                labels[idx].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Status distribution", bars));
        });

    ui.add_space(spacing::LG);

    // Color-keyed counts
    egui::Grid::new("status_counts")
        .num_columns(3)
        .spacing([spacing::MD, spacing::XS])
        .show(ui, |ui| {
            for entry in &counts {
                color_swatch(ui, status_color(&entry.status, dark_mode));
                ui.label(&entry.status);
                ui.label(RichText::new(entry.count.to_string()).strong());
                ui.end_row();
            }
        });
}

/// Strip the shared `STATUS_` prefix so axis labels stay readable.
fn short_label(status: &str) -> String {
    status.strip_prefix("STATUS_").unwrap_or(status).to_string()
}

fn color_swatch(ui: &mut Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}
