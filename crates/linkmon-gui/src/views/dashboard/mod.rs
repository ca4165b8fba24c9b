//! Dashboard view
//!
//! Report header, tab bar, and routing to the tab surfaces: table (with
//! detail panel), charts, screenshot gallery, and the status legend.

mod charts;
mod detail;
mod gallery;
mod status_info;
mod table;

use crate::state::{AppState, DashboardTab};
use crate::theme::{colors, spacing};
use egui::{RichText, Ui};

/// Dashboard view
pub struct DashboardView;

impl DashboardView {
    /// Render the dashboard
    pub fn show(ui: &mut Ui, state: &mut AppState, active_tab: DashboardTab) {
        let theme = colors(state.settings.general.dark_mode);

        // Top bar with report info and back button
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Back", egui_phosphor::regular::ARROW_LEFT))
                .clicked()
            {
                state.go_home();
            }

            ui.separator();

            ui.heading("Report");

            if let Some(path) = &state.report_path {
                ui.label(
                    RichText::new(format!(
                        "{}  •  {} records, {} shown",
                        path.display(),
                        state.store.len(),
                        state.store.filtered_len()
                    ))
                    .color(theme.text_muted),
                );
            }
        });

        ui.add_space(spacing::SM);

        // Tab bar
        ui.horizontal(|ui| {
            for tab in DashboardTab::all() {
                let is_active = *tab == active_tab;
                let text = if is_active {
                    RichText::new(tab.label()).strong().color(theme.accent)
                } else {
                    RichText::new(tab.label()).color(theme.text_secondary)
                };

                if ui.selectable_label(is_active, text).clicked() {
                    state.switch_tab(*tab);
                }
            }
        });

        ui.separator();
        ui.add_space(spacing::SM);

        // Tab content - delegate to submodules
        let dark_mode = state.settings.general.dark_mode;
        match active_tab {
            DashboardTab::Table => table::show(ui, state),
            DashboardTab::Charts => charts::show(ui, &state.store, dark_mode),
            DashboardTab::Gallery => gallery::show(ui, &state.store),
            DashboardTab::StatusCodes => status_info::show(ui, dark_mode),
        }
    }
}
