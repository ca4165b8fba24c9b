//! View components
//!
//! Each view is a read-only consumer of the store's snapshot; user input is
//! routed back through the store's named operations.

mod dashboard;
mod home;
mod sidebar;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use sidebar::FilterSidebar;
