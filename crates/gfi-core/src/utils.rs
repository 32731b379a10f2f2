// SPDX-License-Identifier: Apache-2.0

//! Text utility functions for gfi.
//!
//! Reusable formatting helpers for truncation and relative time display,
//! used by the CLI when rendering result pages.

use chrono::{DateTime, Utc};

/// Truncates text to a maximum length with a custom suffix.
///
/// Uses character count (not byte count) to safely handle multi-byte UTF-8.
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use gfi_core::utils::truncate_with_suffix;
///
/// let text = "This is a very long string that needs truncation";
/// let result = truncate_with_suffix(text, 20, "... [more]");
/// assert!(result.ends_with("... [more]"));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        text.to_string()
    } else {
        let suffix_len = suffix.chars().count();
        let truncate_at = max_len.saturating_sub(suffix_len);
        let truncated: String = text.chars().take(truncate_at).collect();
        format!("{truncated}{suffix}")
    }
}

/// Truncates text to a maximum length with default ellipsis suffix "...".
///
/// # Examples
///
/// ```
/// use gfi_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
///
/// let long = "This is a very long title that exceeds the limit";
/// let result = truncate(long, 20);
/// assert!(result.ends_with("..."));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Formats a `DateTime<Utc>` as relative time (e.g., "3 days ago").
///
/// # Examples
///
/// ```
/// use chrono::{Utc, Duration};
/// use gfi_core::utils::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(&now), "just now");
///
/// let yesterday = now - Duration::days(1);
/// assert_eq!(format_relative_time(&yesterday), "1 day ago");
/// ```
#[must_use]
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 30 {
        let months = duration.num_days() / 30;
        if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{months} months ago")
        }
    } else if duration.num_days() > 0 {
        let days = duration.num_days();
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else if duration.num_hours() > 0 {
        let hours = duration.num_hours();
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Short title", 50), "Short title");
    }

    #[test]
    fn truncate_long_text_with_ellipsis() {
        let long =
            "This is a very long title that should be truncated because it exceeds the limit";
        let result = truncate(long, 30);
        assert_eq!(result.chars().count(), 30);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        let text = "Exactly twenty chars";
        assert_eq!(truncate(text, 20), text);
    }

    #[test]
    fn truncate_with_suffix_long_text() {
        let body = "This is a very long body that should be truncated because it exceeds the maximum length";
        let result = truncate_with_suffix(body, 50, "... [truncated]");
        assert!(result.ends_with("... [truncated]"));
        assert!(result.chars().count() <= 50);
    }

    #[test]
    fn relative_time_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
    }

    #[test]
    fn relative_time_hours_and_days() {
        let five_hours_ago = Utc::now() - Duration::hours(5);
        assert_eq!(format_relative_time(&five_hours_ago), "5 hours ago");

        let three_days_ago = Utc::now() - Duration::days(3);
        assert_eq!(format_relative_time(&three_days_ago), "3 days ago");
    }

    #[test]
    fn relative_time_months() {
        let two_months_ago = Utc::now() - Duration::days(65);
        assert_eq!(format_relative_time(&two_months_ago), "2 months ago");
    }
}
