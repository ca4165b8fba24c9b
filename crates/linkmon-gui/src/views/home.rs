//! Home screen view
//!
//! Report selection: open a processed workbook or pick a recent one.

use crate::state::AppState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use std::path::PathBuf;

/// Home screen view
pub struct HomeView;

impl HomeView {
    /// Render the home screen.
    ///
    /// Returns a workbook path if the user selected one to load.
    pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<PathBuf> {
        let mut selected_report: Option<PathBuf> = None;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL);

            // Title
            ui.heading(RichText::new("Link Monitor").size(32.0));
            ui.add_space(spacing::SM);
            ui.label(RichText::new("Browse URL health-check results from a processed report").weak());

            ui.add_space(spacing::XL);

            // Open report button
            if ui
                .button(
                    RichText::new(format!(
                        "{} Open Report Workbook",
                        egui_phosphor::regular::FOLDER_OPEN
                    ))
                    .size(16.0),
                )
                .clicked()
            {
                if let Some(path) = pick_report_file() {
                    tracing::info!("Selected report: {:?}", path);
                    selected_report = Some(path);
                }
            }

            // Show loaded report if any
            if let Some(path) = state.report_path.clone() {
                ui.add_space(spacing::LG);
                ui.separator();
                ui.add_space(spacing::MD);

                ui.label(
                    RichText::new(format!(
                        "{} Loaded Report",
                        egui_phosphor::regular::DATABASE
                    ))
                    .strong(),
                );
                ui.label(RichText::new(path.display().to_string()).weak().small());
                ui.label(
                    RichText::new(format!("{} records", state.store.len()))
                        .weak()
                        .small(),
                );
                ui.add_space(spacing::SM);

                if ui.button("Return to Dashboard").clicked() {
                    state.open_dashboard();
                }
            }

            // Recent reports
            if !state.settings.recent_reports.is_empty() {
                ui.add_space(spacing::XL);
                ui.separator();
                ui.add_space(spacing::MD);

                ui.label(
                    RichText::new(format!(
                        "{} Recent Reports",
                        egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                let recent_paths: Vec<_> = state.settings.recent_reports.clone();
                for path in recent_paths {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        if ui
                            .button(format!("{} {}", egui_phosphor::regular::FILE_XLS, name))
                            .on_hover_text(path.display().to_string())
                            .clicked()
                        {
                            selected_report = Some(path);
                        }
                    }
                }
            }
        });

        selected_report
    }
}

/// Native file dialog for the report workbook.
fn pick_report_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Excel workbook", &["xlsx"])
        .pick_file()
}
