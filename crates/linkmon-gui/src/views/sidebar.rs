//! Filter sidebar
//!
//! Status checkboxes and the free-text search box, bound directly to the
//! store. Every change goes through a store operation that recomputes the
//! filtered view in the same call.

use crate::state::DashboardState;
use crate::theme::spacing;
use egui::{RichText, Ui};

/// Filter panel bound to the dashboard store
pub struct FilterSidebar;

impl FilterSidebar {
    pub fn show(ui: &mut Ui, store: &mut DashboardState) {
        // One-shot correction: a fully cleared checkbox set re-selects
        // every status once, instead of presenting a silently blank table.
        store.ensure_default_selection();

        ui.add_space(spacing::SM);
        ui.heading("Filters");
        ui.add_space(spacing::MD);

        ui.label(RichText::new("Statuses").strong());
        let statuses: Vec<String> = store.available_statuses().to_vec();
        for status in statuses {
            let mut checked = store.is_status_selected(&status);
            if ui.checkbox(&mut checked, &status).changed() {
                store.update_selected_statuses(|selected| {
                    if checked {
                        selected.insert(status.clone());
                    } else {
                        selected.remove(&status);
                    }
                });
            }
        }

        ui.add_space(spacing::LG);
        ui.label(RichText::new("Search").strong());
        let mut query = store.search_query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(format!(
                    "{} id or URL",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                ))
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            store.set_search_query(query);
        }

        ui.add_space(spacing::LG);
        ui.separator();
        ui.label(
            RichText::new(format!(
                "{} of {} records shown",
                store.filtered_len(),
                store.len()
            ))
            .weak()
            .small(),
        );
    }
}
