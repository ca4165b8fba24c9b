//! Settings types and configuration for the Link Monitor GUI.
//!
//! Everything here is user preference: the dataset itself is never
//! persisted, only dark mode and the recent-report list.

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,

    /// Recently opened report workbooks (most recent first).
    #[serde(default)]
    pub recent_reports: Vec<PathBuf>,
}

impl Settings {
    /// Maximum recent reports to remember.
    pub const MAX_RECENT: usize = 10;

    /// Move `path` to the front of the recent-report list, deduplicating
    /// and capping at [`Self::MAX_RECENT`].
    pub fn remember_report(&mut self, path: &Path) {
        self.recent_reports.retain(|known| known != path);
        self.recent_reports.insert(0, path.to_path_buf());
        self.recent_reports.truncate(Self::MAX_RECENT);
    }
}

/// General application preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_report_deduplicates_and_fronts() {
        let mut settings = Settings::default();
        settings.remember_report(Path::new("/reports/a.xlsx"));
        settings.remember_report(Path::new("/reports/b.xlsx"));
        settings.remember_report(Path::new("/reports/a.xlsx"));

        assert_eq!(
            settings.recent_reports,
            vec![
                PathBuf::from("/reports/a.xlsx"),
                PathBuf::from("/reports/b.xlsx"),
            ]
        );
    }

    #[test]
    fn remember_report_caps_the_list() {
        let mut settings = Settings::default();
        for idx in 0..20 {
            settings.remember_report(Path::new(&format!("/reports/{idx}.xlsx")));
        }
        assert_eq!(settings.recent_reports.len(), Settings::MAX_RECENT);
        assert_eq!(settings.recent_reports[0], PathBuf::from("/reports/19.xlsx"));
    }
}
