//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod dashboard_state;

pub use app_state::{AppState, DashboardTab, LoadPhase, TableColumn, TableDisplay, TableSort, View};
pub use dashboard_state::DashboardState;
