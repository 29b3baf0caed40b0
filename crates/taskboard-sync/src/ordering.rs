//! Ordering rules for the task list.
//!
//! Non-completed rows come first, ordered by due date ascending with dateless
//! rows last. Completed rows follow in the order they were completed.

use chrono::NaiveDate;
use taskboard_models::TaskRow;

/// Sort key of a non-completed row: dated rows first, then by date.
fn sort_key(row: &TaskRow) -> (bool, Option<NaiveDate>) {
    (row.due_date.is_none(), row.due_date)
}

/// Returns true if a row due on `moving` must be placed before `other`.
///
/// A dated row goes before any dateless row and before any row due later.
pub fn sorts_before(moving: NaiveDate, other: Option<NaiveDate>) -> bool {
    match other {
        None => true,
        Some(other) => moving < other,
    }
}

/// Checks the partition-and-sort invariant over a sequence of rows.
pub fn is_well_ordered(rows: &[TaskRow]) -> bool {
    let mut seen_completed = false;
    let mut prev: Option<(bool, Option<NaiveDate>)> = None;

    for row in rows {
        if row.is_completed() {
            seen_completed = true;
            continue;
        }
        if seen_completed {
            return false;
        }

        let key = sort_key(row);
        if let Some(prev) = prev {
            if prev > key {
                return false;
            }
        }
        prev = Some(key);
    }

    true
}
