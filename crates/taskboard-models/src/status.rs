//! Task status types.
//!
//! The status set is closed: every status owns exactly one style family, and
//! each status button renders either the solid (active) or the outline
//! (inactive) variant of its own family.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

/// All statuses, in button-group order.
pub const ALL_STATUSES: [TaskStatus; 3] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

/// Rendering variant of a status button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    /// Highlighted: the button matches the row's current status.
    Solid,
    /// Not highlighted.
    Outline,
}

/// Error returned when a `data-status` value is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status: {0:?}")]
pub struct ParseStatusError(pub String);

impl TaskStatus {
    /// Returns the wire value (`pending`, `in_progress`, `completed`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Returns the default human-readable label.
    ///
    /// The server-supplied label always wins when rendering a confirmed
    /// change; this one is used for snapshots created without a server.
    pub fn default_label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Returns the style family shared by both button variants.
    pub fn style_family(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "secondary",
            TaskStatus::InProgress => "warning",
            TaskStatus::Completed => "success",
        }
    }

    /// Returns the button class for the given variant.
    pub fn button_class(&self, variant: ButtonVariant) -> String {
        match variant {
            ButtonVariant::Solid => format!("btn-{}", self.style_family()),
            ButtonVariant::Outline => format!("btn-outline-{}", self.style_family()),
        }
    }

    /// Returns true for the terminal status.
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
