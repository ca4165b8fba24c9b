//! Application-level state

use std::path::PathBuf;

use linkmon_model::Record;

use super::DashboardState;
use crate::settings::Settings;

/// Top-level application state
pub struct AppState {
    /// Current view/screen
    pub view: View,
    /// Report load phase (loading is the only asynchronous step)
    pub load: LoadPhase,
    /// The dashboard store (empty until a report is loaded)
    pub store: DashboardState,
    /// Table display state (sorting, pagination) - never part of the store's
    /// derived view
    pub table: TableDisplay,
    /// Path of the currently loaded report
    pub report_path: Option<PathBuf>,
    /// User preferences (persisted to disk)
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::default(),
            load: LoadPhase::default(),
            store: DashboardState::default(),
            table: TableDisplay::default(),
            report_path: None,
            settings,
        }
    }

    /// Navigate to the home screen
    pub fn go_home(&mut self) {
        self.view = View::Home;
    }

    /// Navigate to the dashboard on its first tab
    pub fn open_dashboard(&mut self) {
        self.view = View::Dashboard {
            tab: DashboardTab::Table,
        };
    }

    /// Switch tab in the dashboard
    pub fn switch_tab(&mut self, tab: DashboardTab) {
        if let View::Dashboard { tab: current } = &mut self.view {
            *current = tab;
        }
    }

    /// Mark a report load as started
    pub fn begin_load(&mut self, path: PathBuf) {
        self.load = LoadPhase::Loading(path);
    }

    /// Install a loaded dataset and show the dashboard
    pub fn finish_load(&mut self, path: PathBuf, records: Vec<Record>) {
        if records.is_empty() {
            tracing::warn!(path = %path.display(), "report contains no records");
        }
        self.store.load(records);
        self.table = TableDisplay::default();
        self.report_path = Some(path);
        self.load = LoadPhase::Idle;
        self.open_dashboard();
    }

    /// Record a failed load; the dataset on screen (if any) is kept
    pub fn fail_load(&mut self, message: String) {
        self.load = LoadPhase::Failed(message);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadPhase::Loading(_))
    }
}

/// Current view in the application
#[derive(Default, Clone, PartialEq)]
pub enum View {
    /// Home screen - report selection
    #[default]
    Home,
    /// Dashboard with tabs
    Dashboard {
        /// Active tab
        tab: DashboardTab,
    },
}

/// Tabs in the dashboard
#[derive(Default, Clone, Copy, PartialEq)]
pub enum DashboardTab {
    #[default]
    Table,
    Charts,
    Gallery,
    StatusCodes,
}

impl DashboardTab {
    /// Get display name for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Charts => "Charts",
            Self::Gallery => "Gallery",
            Self::StatusCodes => "Status Codes",
        }
    }

    /// Get all tabs in order
    pub fn all() -> &'static [DashboardTab] {
        &[Self::Table, Self::Charts, Self::Gallery, Self::StatusCodes]
    }
}

/// Report load phase
#[derive(Default, Clone, PartialEq)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// A load is in flight; no store mutation happens until it resolves
    Loading(PathBuf),
    /// The last load failed; shown as a blocking error screen
    Failed(String),
}

/// Table display state. Sorting and pagination are strictly a display
/// concern of the table surface; the store's filtered order is untouched.
#[derive(Default, Clone, Copy, PartialEq)]
pub struct TableDisplay {
    pub sort: Option<TableSort>,
    pub page: usize,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TableSort {
    pub column: TableColumn,
    pub ascending: bool,
}

/// Table columns, in display order
#[derive(Clone, Copy, PartialEq)]
pub enum TableColumn {
    Id,
    Url,
    Status,
    LastChecked,
    Log,
}

impl TableColumn {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Url => "URL",
            Self::Status => "Status",
            Self::LastChecked => "Last Checked",
            Self::Log => "Log",
        }
    }

    pub fn all() -> &'static [TableColumn] {
        &[
            Self::Id,
            Self::Url,
            Self::Status,
            Self::LastChecked,
            Self::Log,
        ]
    }
}
