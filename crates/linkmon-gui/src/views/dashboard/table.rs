//! Table tab
//!
//! Master-detail layout: paginated, sortable table of the filtered records
//! on the left, detail panel for the selected record on the right. Sorting
//! and pagination are display state only; the store's filtered order is
//! never touched, and row clicks feed the selection back through the store.

use std::cmp::Ordering;

use crate::state::{AppState, TableColumn, TableDisplay, TableSort};
use crate::theme::{colors, spacing, status_color};
use egui::{RichText, Ui};
use egui_extras::{Column, Size, StripBuilder, TableBuilder};
use linkmon_model::{Record, RecordId};

use super::detail;

/// Rows per table page, as in the source grid.
const PAGE_SIZE: usize = 35;

/// Render the table tab
pub fn show(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        store,
        table,
        settings,
        ..
    } = state;
    let dark_mode = settings.general.dark_mode;
    let theme = colors(dark_mode);
    let available_height = ui.available_height();

    let mut clicked: Option<RecordId> = None;
    {
        let mut rows: Vec<&Record> = store.filtered_records().collect();
        if let Some(sort) = table.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, sort.column);
                if sort.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        let page_count = rows.len().div_ceil(PAGE_SIZE).max(1);
        if table.page >= page_count {
            table.page = page_count - 1;
        }
        let start = table.page * PAGE_SIZE;
        let page_rows = &rows[start..rows.len().min(start + PAGE_SIZE)];
        let selected = store.selected_id().cloned();

        StripBuilder::new(ui)
            .size(Size::remainder()) // Table takes the rest
            .size(Size::exact(1.0)) // Separator
            .size(Size::exact(360.0)) // Detail panel fixed width
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    if page_rows.is_empty() {
                        ui.add_space(spacing::LG);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("No records match the current filters").weak());
                        });
                    } else {
                        render_table(
                            ui,
                            page_rows,
                            table,
                            selected.as_ref(),
                            &mut clicked,
                            dark_mode,
                            available_height - 60.0,
                        );
                    }

                    ui.add_space(spacing::SM);
                    render_pagination(ui, table, page_count);
                });

                strip.cell(|ui| {
                    ui.separator();
                });

                strip.cell(|ui| {
                    egui::ScrollArea::vertical()
                        .max_height(available_height)
                        .show(ui, |ui| {
                            detail::show(ui, store, &theme);
                        });
                });
            });
    }

    if let Some(id) = clicked {
        store.select_record(Some(id));
    }
}

fn render_table(
    ui: &mut Ui,
    page_rows: &[&Record],
    table: &mut TableDisplay,
    selected: Option<&RecordId>,
    clicked: &mut Option<RecordId>,
    dark_mode: bool,
    max_height: f32,
) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .max_scroll_height(max_height.max(120.0))
        .column(Column::auto()) // ID
        .column(Column::remainder().at_least(180.0)) // URL
        .column(Column::auto()) // Status
        .column(Column::auto()) // Last Checked
        .column(Column::remainder()) // Log
        .header(22.0, |mut header| {
            for column in TableColumn::all() {
                header.col(|ui| {
                    sort_header(ui, table, *column);
                });
            }
        })
        .body(|body| {
            body.rows(22.0, page_rows.len(), |mut row| {
                let record = page_rows[row.index()];
                row.set_selected(selected == Some(&record.id));

                row.col(|ui| {
                    ui.label(record.id.as_str());
                });
                row.col(|ui| {
                    ui.label(&record.url);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&record.status)
                            .color(status_color(&record.status, dark_mode)),
                    );
                });
                row.col(|ui| {
                    ui.label(&record.last_checked);
                });
                row.col(|ui| {
                    ui.label(&record.log);
                });

                if row.response().clicked() {
                    *clicked = Some(record.id.clone());
                }
            });
        });
}

/// Clickable column header; first click sorts ascending, the second flips.
fn sort_header(ui: &mut Ui, table: &mut TableDisplay, column: TableColumn) {
    let active = table.sort.filter(|sort| sort.column == column);
    let marker = match active {
        Some(TableSort {
            ascending: true, ..
        }) => format!(" {}", egui_phosphor::regular::CARET_UP),
        Some(TableSort {
            ascending: false, ..
        }) => format!(" {}", egui_phosphor::regular::CARET_DOWN),
        None => String::new(),
    };

    if ui
        .button(RichText::new(format!("{}{marker}", column.label())).strong())
        .clicked()
    {
        table.sort = Some(TableSort {
            column,
            ascending: active.map(|sort| !sort.ascending).unwrap_or(true),
        });
        table.page = 0;
    }
}

fn render_pagination(ui: &mut Ui, table: &mut TableDisplay, page_count: usize) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                table.page > 0,
                egui::Button::new(egui_phosphor::regular::CARET_LEFT),
            )
            .clicked()
        {
            table.page -= 1;
        }

        ui.label(format!("Page {} of {}", table.page + 1, page_count));

        if ui
            .add_enabled(
                table.page + 1 < page_count,
                egui::Button::new(egui_phosphor::regular::CARET_RIGHT),
            )
            .clicked()
        {
            table.page += 1;
        }

        ui.label(
            RichText::new(format!("{PAGE_SIZE} per page"))
                .weak()
                .small(),
        );
    });
}

fn compare(a: &Record, b: &Record, column: TableColumn) -> Ordering {
    match column {
        TableColumn::Id => compare_ids(a.id.as_str(), b.id.as_str()),
        TableColumn::Url => a.url.cmp(&b.url),
        TableColumn::Status => a.status.cmp(&b.status),
        TableColumn::LastChecked => match (a.checked_at(), b.checked_at()) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => a.last_checked.cmp(&b.last_checked),
        },
        TableColumn::Log => a.log.cmp(&b.log),
    }
}

/// Numeric ids sort numerically; anything else falls back to string order.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        _ => a.cmp(b),
    }
}
