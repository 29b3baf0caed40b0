//! Request and response types.

use serde::{Deserialize, Serialize};
use taskboard_models::TaskStatus;

/// Body returned by the status-update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    /// Whether the server accepted the change.
    pub success: bool,
    /// Display label of the new status (on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status_display: Option<String>,
    /// Error message (on failure).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Business outcome of a status-update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The server applied the change.
    Applied {
        /// Label to show for the new status.
        label: String,
    },
    /// The server refused the change.
    Rejected {
        /// Message to show the user verbatim.
        message: String,
    },
}

impl StatusUpdateResponse {
    /// Converts the wire response into an outcome.
    ///
    /// A success without a label falls back to the status' default label; a
    /// failure without a message reports "Unknown error".
    pub fn into_outcome(self, requested: TaskStatus) -> StatusOutcome {
        if self.success {
            StatusOutcome::Applied {
                label: self
                    .new_status_display
                    .unwrap_or_else(|| requested.default_label().to_string()),
            }
        } else {
            StatusOutcome::Rejected {
                message: self.error.unwrap_or_else(|| "Unknown error".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let resp: StatusUpdateResponse =
            serde_json::from_str(r#"{"success": true, "new_status_display": "Виконано"}"#)
                .unwrap();
        assert_eq!(
            resp.into_outcome(TaskStatus::Completed),
            StatusOutcome::Applied {
                label: "Виконано".to_string()
            }
        );
    }

    #[test]
    fn test_failure_response() {
        let resp: StatusUpdateResponse =
            serde_json::from_str(r#"{"success": false, "error": "X"}"#).unwrap();
        assert_eq!(
            resp.into_outcome(TaskStatus::Pending),
            StatusOutcome::Rejected {
                message: "X".to_string()
            }
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let ok: StatusUpdateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(
            ok.into_outcome(TaskStatus::InProgress),
            StatusOutcome::Applied {
                label: "In progress".to_string()
            }
        );

        let err: StatusUpdateResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            err.into_outcome(TaskStatus::InProgress),
            StatusOutcome::Rejected {
                message: "Unknown error".to_string()
            }
        );
    }
}
