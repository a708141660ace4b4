//! Display formatting helpers.

/// Format seconds as `minutes:seconds`, seconds zero-padded to two digits.
///
/// Minutes are not folded into hours: `3725` renders as `62:05`.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
