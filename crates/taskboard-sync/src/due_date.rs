//! Due-date color coding.

use chrono::NaiveDate;
use taskboard_models::{DueStyle, TaskStatus};

/// Whole days from `today` until `due` (negative when overdue).
pub fn days_until(today: NaiveDate, due: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Classifies a due date for display.
///
/// Completed tasks and tasks without a due date are always muted. Otherwise
/// an overdue date is a danger, a date at most `warning_threshold_days` away
/// is a warning, anything later is muted.
pub fn classify_due(
    status: TaskStatus,
    due: Option<NaiveDate>,
    today: NaiveDate,
    warning_threshold_days: i64,
) -> DueStyle {
    if status.is_completed() {
        return DueStyle::Muted;
    }

    let Some(due) = due else {
        return DueStyle::Muted;
    };

    let diff_days = days_until(today, due);
    if diff_days < 0 {
        DueStyle::Danger
    } else if diff_days <= warning_threshold_days {
        DueStyle::Warning
    } else {
        DueStyle::Muted
    }
}
