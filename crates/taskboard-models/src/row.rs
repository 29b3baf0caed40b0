//! Task row types.
//!
//! A `TaskRow` mirrors one rendered row of the task list. Sub-elements that
//! a template may omit (status label, due-date display, button group,
//! description) are `Option`s; `None` means the element is absent from the
//! page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::due::{DueDisplay, DueStyle};
use crate::ids::TaskId;
use crate::status::{ButtonVariant, TaskStatus, ALL_STATUSES};

/// A status control inside a row's button group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusButton {
    /// The status this button switches to (`data-status`).
    pub status: TaskStatus,
    /// Current rendering variant; `None` when no status class is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
}

impl StatusButton {
    /// Creates a button with no status class.
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            variant: None,
        }
    }

    /// Returns the class currently applied, if any.
    pub fn css_class(&self) -> Option<String> {
        self.variant.map(|v| self.status.button_class(v))
    }
}

/// Collapsible task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Description text.
    pub text: String,
    /// Whether the description is shown expanded.
    #[serde(default)]
    pub expanded: bool,
}

/// One task within the ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Task identifier.
    pub id: TaskId,

    /// Task title.
    pub title: String,

    /// Current status (`data-status`).
    pub status: TaskStatus,

    /// Due date without time component (`data-due-date`).
    #[serde(
        default,
        deserialize_with = "crate::due::deserialize_due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,

    /// Text of the status label element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,

    /// Due-date display element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_display: Option<DueDisplay>,

    /// Status button group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<StatusButton>>,

    /// Completed-row highlight.
    #[serde(default)]
    pub completed_marker: bool,

    /// Collapsible description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl TaskRow {
    /// Creates a row rendered the way the server renders a fresh task:
    /// label, full button group with the current status highlighted, and the
    /// completed marker when the task is already done.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, status: TaskStatus) -> Self {
        let buttons = ALL_STATUSES
            .iter()
            .map(|&s| StatusButton {
                status: s,
                variant: Some(if s == status {
                    ButtonVariant::Solid
                } else {
                    ButtonVariant::Outline
                }),
            })
            .collect();

        Self {
            id: id.into(),
            title: title.into(),
            status,
            due_date: None,
            status_label: Some(status.default_label().to_string()),
            due_display: None,
            buttons: Some(buttons),
            completed_marker: status.is_completed(),
            description: None,
        }
    }

    /// Sets the due date and adds a due-date display element for it.
    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self.due_display = Some(DueDisplay::new(due.format("%d.%m.%Y").to_string()));
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(Description {
            text: text.into(),
            expanded: false,
        });
        self
    }

    /// Removes the status label element.
    pub fn without_status_label(mut self) -> Self {
        self.status_label = None;
        self
    }

    /// Removes the due-date display element.
    pub fn without_due_display(mut self) -> Self {
        self.due_display = None;
        self
    }

    /// Removes the status button group.
    pub fn without_buttons(mut self) -> Self {
        self.buttons = None;
        self
    }

    /// Returns true if the row carries a due date.
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Returns true if the row is in the completed partition.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Returns the button for the given status, if present.
    pub fn button(&self, status: TaskStatus) -> Option<&StatusButton> {
        self.buttons
            .as_ref()
            .and_then(|buttons| buttons.iter().find(|b| b.status == status))
    }

    /// Returns the buttons currently rendered solid.
    pub fn active_buttons(&self) -> Vec<&StatusButton> {
        self.buttons
            .iter()
            .flatten()
            .filter(|b| b.variant == Some(ButtonVariant::Solid))
            .collect()
    }

    /// Returns the current due-date style, if the display exists and is styled.
    pub fn due_style(&self) -> Option<DueStyle> {
        self.due_display.as_ref().and_then(|d| d.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_highlights_current_status() {
        let row = TaskRow::new("1", "Write report", TaskStatus::InProgress);
        let active = row.active_buttons();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].status, TaskStatus::InProgress);
        assert_eq!(
            row.button(TaskStatus::Pending).unwrap().css_class().as_deref(),
            Some("btn-outline-secondary")
        );
        assert!(!row.completed_marker);
    }

    #[test]
    fn test_new_completed_row_is_marked() {
        let row = TaskRow::new("2", "Done", TaskStatus::Completed);
        assert!(row.completed_marker);
        assert!(row.is_completed());
    }

    #[test]
    fn test_with_due_date_adds_display() {
        let due = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let row = TaskRow::new("3", "Ship", TaskStatus::Pending).with_due_date(due);
        assert!(row.has_due_date());
        assert_eq!(row.due_display.as_ref().unwrap().text, "04.05.2026");
        assert_eq!(row.due_style(), None);
    }

    #[test]
    fn test_missing_elements() {
        let row = TaskRow::new("4", "Bare", TaskStatus::Pending)
            .without_status_label()
            .without_buttons()
            .without_due_display();
        assert!(row.status_label.is_none());
        assert!(row.active_buttons().is_empty());
        assert!(row.button(TaskStatus::Pending).is_none());
    }

    #[test]
    fn test_row_deserializes_with_defaults() {
        let json = r#"{"id":"5","title":"Imported","status":"pending","due_date":"2026-01-02"}"#;
        let row: TaskRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.id.as_str(), "5");
        assert_eq!(row.due_date, NaiveDate::from_ymd_opt(2026, 1, 2));
        assert!(row.buttons.is_none());
        assert!(!row.completed_marker);
    }

    #[test]
    fn test_row_due_date_accepts_datetimes() {
        let json = r#"[
            {"id":"1","title":"a","status":"pending","due_date":"2026-10-20T00:00:00"},
            {"id":"2","title":"b","status":"pending","due_date":"2026-10-21T09:30:00+02:00"},
            {"id":"3","title":"c","status":"pending","due_date":"2026-10-22 18:00:00"},
            {"id":"4","title":"d","status":"pending","due_date":""},
            {"id":"5","title":"e","status":"pending","due_date":null}
        ]"#;
        let rows: Vec<TaskRow> = serde_json::from_str(json).unwrap();
        let dates: Vec<_> = rows.iter().map(|r| r.due_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 10, 20),
                NaiveDate::from_ymd_opt(2026, 10, 21),
                NaiveDate::from_ymd_opt(2026, 10, 22),
                None,
                None,
            ]
        );

        let out = serde_json::to_string(&rows[0]).unwrap();
        assert!(out.contains(r#""due_date":"2026-10-20""#));
    }

    #[test]
    fn test_row_rejects_garbage_due_date() {
        let json = r#"{"id":"1","title":"a","status":"pending","due_date":"next week"}"#;
        let err = serde_json::from_str::<TaskRow>(json).unwrap_err();
        assert!(err.to_string().contains("invalid due date"));
    }
}
