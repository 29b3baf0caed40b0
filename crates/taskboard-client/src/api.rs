//! The server operations page controllers depend on.

use async_trait::async_trait;
use taskboard_models::{TaskId, TaskStatus};

use crate::error::Result;
use crate::types::StatusOutcome;

/// Server endpoints used by the task list page.
///
/// `TaskClient` implements this over HTTP; tests substitute in-memory fakes.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Requests a status change for a task.
    ///
    /// `Ok` carries the business outcome (applied or rejected); `Err` means
    /// no usable answer was received.
    async fn update_status(&self, task_id: &TaskId, status: TaskStatus) -> Result<StatusOutcome>;

    /// Deletes a task.
    async fn delete_task(&self, task_id: &TaskId) -> Result<()>;

    /// Fetches tag suggestions for a search term.
    async fn autocomplete_tags(&self, term: &str) -> Result<Vec<String>>;
}
