//! Dashboard state store.
//!
//! Single authoritative holder of the loaded records, the filter criteria,
//! the selection, and the derived filtered view. Views read snapshots and
//! mutate only through the named operations here; every criteria mutation
//! recomputes the derived view in the same call, so a stale `filtered` is
//! unrepresentable.

use std::collections::BTreeSet;

use linkmon_core::{FilterCriteria, StatusCount, distinct_statuses, filter_indices, status_counts};
use linkmon_model::{Record, RecordId};

pub struct DashboardState {
    /// The canonical record collection, immutable between loads.
    all: Vec<Record>,
    /// Indices into `all` passing the current criteria, in `all` order.
    filtered: Vec<usize>,
    /// Distinct status values, in order of first appearance.
    available_statuses: Vec<String>,
    criteria: FilterCriteria,
    /// Selection is an id resolved against `all` on demand, never a live
    /// reference, so filter changes cannot invalidate it.
    selected_id: Option<RecordId>,
    sidebar_open: bool,
    /// One-shot guard for the select-all correction (see
    /// [`Self::ensure_default_selection`]).
    default_selection_applied: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            available_statuses: Vec::new(),
            criteria: FilterCriteria::default(),
            selected_id: None,
            sidebar_open: true,
            default_selection_applied: false,
        }
    }
}

impl DashboardState {
    // ========================================================================
    // Loading
    // ========================================================================

    /// Replace the dataset. All statuses start selected, the search query
    /// resets, the selection clears, and the filtered view is the full set.
    pub fn load(&mut self, records: Vec<Record>) {
        self.available_statuses = distinct_statuses(&records);
        self.criteria = FilterCriteria {
            selected_statuses: self.available_statuses.iter().cloned().collect(),
            search_query: String::new(),
        };
        self.filtered = (0..records.len()).collect();
        self.all = records;
        self.selected_id = None;
        self.default_selection_applied = false;
        tracing::info!(
            records = self.all.len(),
            statuses = self.available_statuses.len(),
            "dashboard state loaded"
        );
    }

    // ========================================================================
    // Filter criteria
    // ========================================================================

    /// Replace the selected-status set and recompute the filtered view.
    pub fn set_selected_statuses(&mut self, statuses: BTreeSet<String>) {
        self.criteria.selected_statuses = statuses;
        self.recompute_filtered();
    }

    /// Transform the selected-status set in place (checkbox add/remove
    /// path) and recompute the filtered view.
    pub fn update_selected_statuses(&mut self, update: impl FnOnce(&mut BTreeSet<String>)) {
        update(&mut self.criteria.selected_statuses);
        self.recompute_filtered();
    }

    /// Replace the search query and recompute the filtered view.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.recompute_filtered();
    }

    /// Recompute `filtered` from the current criteria. Idempotent; the
    /// criteria setters already call this, so an explicit call is only ever
    /// needed by code that mutated nothing.
    pub fn recompute_filtered(&mut self) {
        self.filtered = filter_indices(&self.all, &self.criteria);
    }

    /// Guarded one-shot correction: if statuses are available but none is
    /// selected (the user cleared every checkbox), select all of them once
    /// per load rather than leaving a blank table with no way to tell why.
    pub fn ensure_default_selection(&mut self) {
        if self.default_selection_applied
            || self.available_statuses.is_empty()
            || !self.criteria.selected_statuses.is_empty()
        {
            return;
        }
        self.default_selection_applied = true;
        self.set_selected_statuses(self.available_statuses.iter().cloned().collect());
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a record by id, or clear the selection with `None`. The
    /// selection is independent of the filtered view: filtering a selected
    /// record out leaves it selected until the user picks another.
    pub fn select_record(&mut self, id: Option<RecordId>) {
        self.selected_id = id;
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected_id.as_ref()
    }

    /// Resolve the selected id against the canonical collection.
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected_id.as_ref()?;
        self.all.iter().find(|record| &record.id == id)
    }

    // ========================================================================
    // Sidebar visibility (UI-only flag sharing the store)
    // ========================================================================

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub fn records(&self) -> &[Record] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The filtered view, preserving the order of the full collection.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        self.filtered.iter().map(|&idx| &self.all[idx])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn available_statuses(&self) -> &[String] {
        &self.available_statuses
    }

    pub fn selected_statuses(&self) -> &BTreeSet<String> {
        &self.criteria.selected_statuses
    }

    pub fn is_status_selected(&self, status: &str) -> bool {
        self.criteria.selected_statuses.contains(status)
    }

    pub fn search_query(&self) -> &str {
        &self.criteria.search_query
    }

    /// Per-status counts over the full dataset (chart + legend input).
    pub fn status_counts(&self) -> Vec<StatusCount> {
        status_counts(&self.all)
    }
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("records", &self.all.len())
            .field("filtered", &self.filtered.len())
            .field("available_statuses", &self.available_statuses.len())
            .field("selected_statuses", &self.criteria.selected_statuses.len())
            .field("search_query", &self.criteria.search_query)
            .field("selected_id", &self.selected_id)
            .field("sidebar_open", &self.sidebar_open)
            .finish()
    }
}
