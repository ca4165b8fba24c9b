//! Main application struct and eframe::App implementation

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;

use crate::services::ReportLoader;
use crate::settings::{load_settings, save_settings};
use crate::state::{AppState, LoadPhase, View};
use crate::theme::{colors, spacing};
use crate::views::{DashboardView, FilterSidebar, HomeView};

/// Main application struct
pub struct LinkMonApp {
    state: AppState,
    loader: ReportLoader,
}

impl LinkMonApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Screenshot rendering goes through egui's image loaders
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);

        Self {
            state: AppState::new(settings),
            loader: ReportLoader::default(),
        }
    }
}

impl eframe::App for LinkMonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark_mode = self.state.settings.general.dark_mode;
        ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        let theme = colors(dark_mode);

        // Resolve any finished background load before rendering
        self.poll_loader();

        // Track if we need to start loading a report
        let mut report_to_load: Option<PathBuf> = None;

        self.handle_shortcuts(ctx, &mut report_to_load);

        // Header bar
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(spacing::XS);
            ui.horizontal(|ui| {
                if matches!(self.state.view, View::Dashboard { .. }) {
                    let icon = if self.state.store.sidebar_open() {
                        egui_phosphor::regular::X
                    } else {
                        egui_phosphor::regular::LIST
                    };
                    if ui
                        .button(icon)
                        .on_hover_text("Toggle filter sidebar")
                        .clicked()
                    {
                        self.state.store.toggle_sidebar();
                    }
                }

                ui.heading("URL Status Monitoring Dashboard");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (icon, hover) = if dark_mode {
                        (egui_phosphor::regular::SUN, "Switch to light mode")
                    } else {
                        (egui_phosphor::regular::MOON, "Switch to dark mode")
                    };
                    if ui.button(icon).on_hover_text(hover).clicked() {
                        self.state.settings.general.dark_mode = !dark_mode;
                        if let Err(e) = save_settings(&self.state.settings) {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    }
                });
            });
            ui.add_space(spacing::XS);
        });

        // Filter sidebar (dashboard only, never over the loading/error screens)
        if matches!(self.state.view, View::Dashboard { .. })
            && self.state.store.sidebar_open()
            && self.state.load == LoadPhase::Idle
        {
            egui::SidePanel::left("filter_sidebar")
                .default_width(240.0)
                .show(ctx, |ui| {
                    FilterSidebar::show(ui, &mut self.state.store);
                });
        }

        // Main panel
        egui::CentralPanel::default().show(ctx, |ui| match self.state.load.clone() {
            LoadPhase::Loading(path) => {
                show_loading(ui, &path, &theme);
                // Keep polling even without input events
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            LoadPhase::Failed(message) => {
                if show_load_error(ui, &message, &theme) {
                    self.state.load = LoadPhase::Idle;
                    self.state.go_home();
                }
            }
            LoadPhase::Idle => match self.state.view.clone() {
                View::Home => {
                    report_to_load = HomeView::show(ui, &mut self.state);
                }
                View::Dashboard { tab } => {
                    DashboardView::show(ui, &mut self.state, tab);
                }
            },
        });

        // Start loading if a report was selected
        if let Some(path) = report_to_load {
            self.begin_load(path);
        }
    }
}

impl LinkMonApp {
    /// Start a background load for `path`
    fn begin_load(&mut self, path: PathBuf) {
        if self.loader.in_flight() {
            tracing::warn!("Ignoring open request while a load is in flight");
            return;
        }
        self.state.begin_load(path.clone());
        self.loader.start(path);
    }

    /// Apply the outcome of a finished background load
    fn poll_loader(&mut self) {
        let Some((path, result)) = self.loader.poll() else {
            return;
        };

        match result {
            Ok(records) => {
                tracing::info!(
                    "Loaded report '{}' with {} records",
                    path.display(),
                    records.len()
                );
                self.state.settings.remember_report(&path);
                if let Err(e) = save_settings(&self.state.settings) {
                    tracing::error!("Failed to save settings: {}", e);
                }
                self.state.finish_load(path, records);
            }
            Err(e) => {
                tracing::error!("Failed to load report: {:#}", e);
                self.state.fail_load(e.to_string());
            }
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context, report_to_load: &mut Option<PathBuf>) {
        // Use Cmd on macOS, Ctrl on other platforms
        let modifiers = ctx.input(|i| i.modifiers);
        let cmd_or_ctrl = if cfg!(target_os = "macos") {
            modifiers.command
        } else {
            modifiers.ctrl
        };

        let (open_pressed, escape_pressed) = ctx.input(|i| {
            (
                cmd_or_ctrl && i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::Escape),
            )
        });

        // Cmd/Ctrl+O - Open report
        if open_pressed && !self.loader.in_flight() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Excel workbook", &["xlsx"])
                .pick_file()
            {
                tracing::info!("Opening report: {:?}", path);
                *report_to_load = Some(path);
            }
        }

        // Escape - Dismiss the error screen or go back home
        if escape_pressed {
            if matches!(self.state.load, LoadPhase::Failed(_)) {
                self.state.load = LoadPhase::Idle;
                self.state.go_home();
            } else if !self.state.is_loading() {
                self.state.go_home();
            }
        }
    }
}

/// Full-screen loading indicator shown while the workbook is read
fn show_loading(ui: &mut egui::Ui, path: &std::path::Path, theme: &crate::theme::ThemeColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
        ui.add_space(spacing::MD);
        ui.label(
            egui::RichText::new("Loading report...")
                .size(16.0)
                .color(theme.text_secondary),
        );
        ui.add_space(spacing::SM);
        ui.label(
            egui::RichText::new(path.display().to_string())
                .small()
                .color(theme.text_muted),
        );
    });
}

/// Blocking full-screen load error. Returns true when the user dismissed it.
fn show_load_error(ui: &mut egui::Ui, message: &str, theme: &crate::theme::ThemeColors) -> bool {
    let mut dismissed = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            egui::RichText::new(format!(
                "{} Failed to load report",
                egui_phosphor::regular::WARNING
            ))
            .size(18.0)
            .color(theme.error),
        );
        ui.add_space(spacing::SM);
        ui.label(egui::RichText::new(message).color(theme.text_secondary));
        ui.add_space(spacing::MD);
        if ui.button("Back to Home").clicked() {
            dismissed = true;
        }
    });
    dismissed
}
