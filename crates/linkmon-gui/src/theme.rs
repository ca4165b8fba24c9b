//! Theme and styling constants

use egui::Color32;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Semantic colors not covered by egui's visuals
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub accent: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// Resolve the semantic palette for the active mode.
pub fn colors(dark_mode: bool) -> ThemeColors {
    if dark_mode {
        ThemeColors {
            accent: Color32::from_rgb(96, 165, 250),
            text_secondary: Color32::from_rgb(180, 185, 190),
            text_muted: Color32::from_rgb(130, 135, 140),
            success: Color32::from_rgb(74, 222, 128),
            warning: Color32::from_rgb(250, 204, 21),
            error: Color32::from_rgb(248, 113, 113),
        }
    } else {
        ThemeColors {
            accent: Color32::from_rgb(26, 115, 232),
            text_secondary: Color32::from_rgb(75, 85, 99),
            text_muted: Color32::from_rgb(140, 145, 150),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(202, 138, 4),
            error: Color32::from_rgb(220, 38, 38),
        }
    }
}

/// Triage color for a status label (table, legend, and chart bars).
///
/// Unrecognized labels fall back to gray; filtering itself never looks at
/// the vocabulary.
pub fn status_color(status: &str, dark_mode: bool) -> Color32 {
    let theme = colors(dark_mode);
    match status {
        "STATUS_OK" => theme.success,
        "STATUS_REDIRECT" => theme.accent,
        "STATUS_EMPTY_CONTENT" => theme.warning,
        "STATUS_CLIENT_ERROR" | "STATUS_SERVER_ERROR" | "STATUS_ERROR" => theme.error,
        status if status.starts_with("STATUS_YOUTUBE_") => {
            if dark_mode {
                Color32::from_rgb(196, 151, 255)
            } else {
                Color32::from_rgb(126, 34, 206)
            }
        }
        _ => theme.text_muted,
    }
}
