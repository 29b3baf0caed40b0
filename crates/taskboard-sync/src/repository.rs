//! Row storage abstraction.
//!
//! The synchronizer never touches a document directly; it goes through a
//! `RowRepository`. `TaskList` is the in-memory implementation used by the
//! CLI host and by tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskboard_models::{TaskId, TaskRow, TaskStatus};
use tracing::trace;

use crate::error::{Result, SyncError};
use crate::ordering::{self, sorts_before};

/// Access to the rows of one ordered list container.
pub trait RowRepository {
    /// Looks up a row by task id.
    fn find_row(&self, id: &TaskId) -> Option<&TaskRow>;

    /// Looks up a row by task id for mutation.
    fn find_row_mut(&mut self, id: &TaskId) -> Option<&mut TaskRow>;

    /// Sets the row's status and moves it to its place in the container.
    fn reorder(&mut self, id: &TaskId, status: TaskStatus, due_date: Option<NaiveDate>)
        -> Result<()>;

    /// Removes a row, returning it if it existed.
    fn remove_row(&mut self, id: &TaskId) -> Option<TaskRow>;

    /// Returns the task ids in container order.
    fn row_ids(&self) -> Vec<TaskId>;
}

/// In-memory ordered list of task rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    rows: Vec<TaskRow>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from rows in rendered order.
    pub fn from_rows(rows: Vec<TaskRow>) -> Self {
        Self { rows }
    }

    /// Appends a row at the end of the container.
    pub fn push(&mut self, row: TaskRow) {
        self.rows.push(row);
    }

    /// Returns the rows in container order.
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    /// Returns the index of the row with the given id.
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.rows.iter().position(|r| &r.id == id)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks the partition-and-sort invariant.
    pub fn is_well_ordered(&self) -> bool {
        ordering::is_well_ordered(&self.rows)
    }

    /// Finds where a non-completed row with the given due date belongs.
    ///
    /// Scans open rows for the first one that sorts after the moving row;
    /// falls back to the first completed row, then to the end.
    fn insertion_index(&self, due_date: Option<NaiveDate>) -> usize {
        if let Some(due) = due_date {
            let before_open = self
                .rows
                .iter()
                .position(|r| !r.is_completed() && sorts_before(due, r.due_date));
            if let Some(index) = before_open {
                return index;
            }
        }

        self.rows
            .iter()
            .position(|r| r.is_completed())
            .unwrap_or(self.rows.len())
    }
}

impl RowRepository for TaskList {
    fn find_row(&self, id: &TaskId) -> Option<&TaskRow> {
        self.rows.iter().find(|r| &r.id == id)
    }

    fn find_row_mut(&mut self, id: &TaskId) -> Option<&mut TaskRow> {
        self.rows.iter_mut().find(|r| &r.id == id)
    }

    fn reorder(
        &mut self,
        id: &TaskId,
        status: TaskStatus,
        due_date: Option<NaiveDate>,
    ) -> Result<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| SyncError::RowNotFound(id.to_string()))?;

        let mut row = self.rows.remove(pos);
        let was_completed = row.is_completed();
        row.status = status;

        if status.is_completed() {
            row.completed_marker = true;
            self.rows.push(row);
            trace!(task_id = %id, "moved completed row to end");
            return Ok(());
        }

        row.completed_marker = false;

        // An open dateless row already sits in the dateless tail, so it stays
        // put instead of jumping ahead of the first completed row.
        let target = match due_date {
            None if !was_completed => pos,
            _ => self.insertion_index(due_date),
        };

        trace!(task_id = %id, from = pos, to = target, "reordered row");
        self.rows.insert(target, row);
        Ok(())
    }

    fn remove_row(&mut self, id: &TaskId) -> Option<TaskRow> {
        let pos = self.position(id)?;
        Some(self.rows.remove(pos))
    }

    fn row_ids(&self) -> Vec<TaskId> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn row(id: &str, status: TaskStatus, due: Option<u32>) -> TaskRow {
        let row = TaskRow::new(id, id, status);
        match due {
            Some(d) => row.with_due_date(date(d)),
            None => row,
        }
    }

    fn ids(list: &TaskList) -> Vec<String> {
        list.row_ids().into_iter().map(|id| id.to_string()).collect()
    }

    fn sample() -> TaskList {
        TaskList::from_rows(vec![
            row("a", TaskStatus::Pending, Some(3)),
            row("b", TaskStatus::Pending, Some(10)),
            row("c", TaskStatus::InProgress, None),
            row("d", TaskStatus::Completed, Some(1)),
            row("e", TaskStatus::Completed, None),
        ])
    }

    #[test]
    fn test_find_row() {
        let list = sample();
        assert_eq!(list.find_row(&"c".into()).unwrap().title, "c");
        assert!(list.find_row(&"zz".into()).is_none());
    }

    #[test]
    fn test_completed_moves_to_end() {
        let mut list = sample();
        list.reorder(&"a".into(), TaskStatus::Completed, Some(date(3)))
            .unwrap();
        assert_eq!(ids(&list), vec!["b", "c", "d", "e", "a"]);
        let moved = list.find_row(&"a".into()).unwrap();
        assert!(moved.completed_marker);
        assert_eq!(moved.status, TaskStatus::Completed);
    }

    #[test]
    fn test_reopened_dated_row_inserted_by_date() {
        let mut list = sample();
        list.reorder(&"d".into(), TaskStatus::Pending, Some(date(1)))
            .unwrap();
        assert_eq!(ids(&list), vec!["d", "a", "b", "c", "e"]);
        assert!(!list.find_row(&"d".into()).unwrap().completed_marker);
        assert!(list.is_well_ordered());
    }

    #[test]
    fn test_reopened_row_between_dates() {
        let mut list = TaskList::from_rows(vec![
            row("a", TaskStatus::Pending, Some(3)),
            row("b", TaskStatus::Pending, Some(10)),
            row("x", TaskStatus::Completed, Some(5)),
        ]);
        list.reorder(&"x".into(), TaskStatus::InProgress, Some(date(5)))
            .unwrap();
        assert_eq!(ids(&list), vec!["a", "x", "b"]);
    }

    #[test]
    fn test_equal_dates_insert_after_existing() {
        let mut list = TaskList::from_rows(vec![
            row("a", TaskStatus::Pending, Some(3)),
            row("b", TaskStatus::Pending, None),
            row("x", TaskStatus::Completed, Some(3)),
        ]);
        list.reorder(&"x".into(), TaskStatus::Pending, Some(date(3)))
            .unwrap();
        assert_eq!(ids(&list), vec!["a", "x", "b"]);
    }

    #[test]
    fn test_reopened_dateless_row_goes_before_completed() {
        let mut list = sample();
        list.reorder(&"e".into(), TaskStatus::Pending, None).unwrap();
        assert_eq!(ids(&list), vec!["a", "b", "c", "e", "d"]);
        assert!(list.is_well_ordered());
    }

    #[test]
    fn test_open_dateless_row_keeps_position() {
        let mut list = TaskList::from_rows(vec![
            row("a", TaskStatus::Pending, Some(3)),
            row("b", TaskStatus::Pending, None),
            row("c", TaskStatus::InProgress, None),
            row("d", TaskStatus::Pending, None),
        ]);
        list.reorder(&"c".into(), TaskStatus::Pending, None).unwrap();
        assert_eq!(ids(&list), vec!["a", "b", "c", "d"]);
        assert_eq!(list.find_row(&"c".into()).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_no_completed_rows_appends() {
        let mut list = TaskList::from_rows(vec![
            row("a", TaskStatus::Pending, Some(3)),
            row("b", TaskStatus::Pending, Some(4)),
        ]);
        list.reorder(&"a".into(), TaskStatus::InProgress, Some(date(9)))
            .unwrap();
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_unknown_row() {
        let mut list = sample();
        let err = list
            .reorder(&"nope".into(), TaskStatus::Pending, None)
            .unwrap_err();
        assert_eq!(err, SyncError::RowNotFound("nope".to_string()));
    }

    #[test]
    fn test_remove_row() {
        let mut list = sample();
        let removed = list.remove_row(&"b".into()).unwrap();
        assert_eq!(removed.id.as_str(), "b");
        assert_eq!(list.len(), 4);
        assert!(list.remove_row(&"b".into()).is_none());
    }

    #[test]
    fn test_snapshot_serialization() {
        let list = sample();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        let parsed: TaskList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }
}
