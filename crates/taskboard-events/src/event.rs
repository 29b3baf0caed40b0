//! Row events.

use taskboard_models::{TaskId, TaskStatus};

/// Events published about a task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// The server confirmed a status change and the row was updated.
    StatusApplied {
        /// Task ID.
        task_id: TaskId,
        /// New status.
        status: TaskStatus,
        /// Label supplied by the server.
        label: String,
    },
    /// The server refused a status change.
    StatusRejected {
        /// Task ID.
        task_id: TaskId,
        /// Server error message.
        message: String,
    },
    /// The status request never produced a usable answer.
    StatusFailed {
        /// Task ID.
        task_id: TaskId,
        /// Error description.
        error: String,
    },
    /// The user asked to delete a task; confirmation is pending.
    DeleteRequested {
        /// Task ID.
        task_id: TaskId,
    },
    /// The task was deleted on the server and its row removed.
    Deleted {
        /// Task ID.
        task_id: TaskId,
    },
    /// A row's description was expanded or collapsed.
    DescriptionToggled {
        /// Task ID.
        task_id: TaskId,
        /// Whether the description is now expanded.
        expanded: bool,
    },
}

impl RowEvent {
    /// Returns the task ID the event is addressed to.
    pub fn task_id(&self) -> &TaskId {
        match self {
            RowEvent::StatusApplied { task_id, .. } => task_id,
            RowEvent::StatusRejected { task_id, .. } => task_id,
            RowEvent::StatusFailed { task_id, .. } => task_id,
            RowEvent::DeleteRequested { task_id } => task_id,
            RowEvent::Deleted { task_id } => task_id,
            RowEvent::DescriptionToggled { task_id, .. } => task_id,
        }
    }

    /// Returns true if this event reports a failed action.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            RowEvent::StatusRejected { .. } | RowEvent::StatusFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_task_id() {
        let task_id = TaskId::from("12");

        let event = RowEvent::StatusApplied {
            task_id: task_id.clone(),
            status: TaskStatus::Pending,
            label: "Pending".to_string(),
        };
        assert_eq!(event.task_id(), &task_id);

        let event = RowEvent::Deleted {
            task_id: task_id.clone(),
        };
        assert_eq!(event.task_id(), &task_id);

        let event = RowEvent::DescriptionToggled {
            task_id: task_id.clone(),
            expanded: true,
        };
        assert_eq!(event.task_id(), &task_id);
    }

    #[test]
    fn test_is_error() {
        let task_id = TaskId::from("1");
        assert!(RowEvent::StatusRejected {
            task_id: task_id.clone(),
            message: "nope".to_string(),
        }
        .is_error());
        assert!(RowEvent::StatusFailed {
            task_id: task_id.clone(),
            error: "timeout".to_string(),
        }
        .is_error());
        assert!(!RowEvent::DeleteRequested { task_id }.is_error());
    }
}
