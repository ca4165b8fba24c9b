//! Status vocabulary for check outcomes.
//!
//! These labels classify a check result (success, redirect, client/server
//! error, content and video-availability anomalies). Filtering never
//! validates against this vocabulary; it exists for display only.

/// Recognized status labels, in legend order.
pub const RECOGNIZED_STATUSES: [&str; 11] = [
    "STATUS_OK",
    "STATUS_REDIRECT",
    "STATUS_CLIENT_ERROR",
    "STATUS_SERVER_ERROR",
    "STATUS_EMPTY_CONTENT",
    "STATUS_YOUTUBE_PRIVATE",
    "STATUS_YOUTUBE_DELETED",
    "STATUS_YOUTUBE_AGE_RESTRICTED",
    "STATUS_YOUTUBE_REGION_BLOCKED",
    "STATUS_YOUTUBE_UNAVAILABLE",
    "STATUS_ERROR",
];

/// Human-readable description of a recognized status label.
pub fn describe_status(status: &str) -> Option<&'static str> {
    match status {
        "STATUS_OK" => Some("Page responded normally"),
        "STATUS_REDIRECT" => Some("Request was redirected"),
        "STATUS_CLIENT_ERROR" => Some("Client error (4xx status code)"),
        "STATUS_SERVER_ERROR" => Some("Server error (5xx status code)"),
        "STATUS_EMPTY_CONTENT" => Some("Empty page detected"),
        "STATUS_YOUTUBE_PRIVATE" => Some("YouTube video is private"),
        "STATUS_YOUTUBE_DELETED" => Some("YouTube video was deleted"),
        "STATUS_YOUTUBE_AGE_RESTRICTED" => Some("YouTube video is age restricted"),
        "STATUS_YOUTUBE_REGION_BLOCKED" => Some("YouTube video is blocked in this region"),
        "STATUS_YOUTUBE_UNAVAILABLE" => Some("YouTube video is unavailable"),
        "STATUS_ERROR" => Some("Check failed with an unclassified error"),
        _ => None,
    }
}

/// Whether a label belongs to the recognized vocabulary.
pub fn is_recognized_status(status: &str) -> bool {
    describe_status(status).is_some()
}
