//! Confirm-before-delete dialog.

use taskboard_client::TaskApi;
use taskboard_events::{RowEvent, RowEventBus};
use taskboard_models::TaskId;
use taskboard_sync::RowRepository;
use tracing::{debug, info, warn};

use crate::notice::{Notice, Notifier};

/// Result of confirming a pending delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The dialog was not open.
    NoPending,
    /// The task was deleted and its row removed.
    Deleted(TaskId),
    /// The task was deleted but its row had already left the page.
    RowMissing(TaskId),
    /// The server did not delete the task; the dialog stays open.
    Failed(TaskId),
}

/// Delete confirmation dialog state.
///
/// At most one delete is pending at a time; requesting another replaces it.
#[derive(Clone, Default)]
pub struct DeleteConfirmation {
    pending: Option<TaskId>,
    bus: RowEventBus,
}

impl DeleteConfirmation {
    /// Creates a closed dialog publishing on `bus`.
    pub fn new(bus: RowEventBus) -> Self {
        Self { pending: None, bus }
    }

    /// Opens the dialog for `task_id`.
    pub fn request(&mut self, task_id: TaskId) {
        debug!(task_id = %task_id, "Delete requested");
        self.bus.emit(RowEvent::DeleteRequested {
            task_id: task_id.clone(),
        });
        self.pending = Some(task_id);
    }

    /// Closes the dialog without deleting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the task awaiting confirmation.
    pub fn pending(&self) -> Option<&TaskId> {
        self.pending.as_ref()
    }

    /// Returns true while the dialog is open.
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Confirms the pending delete.
    pub async fn confirm<A, R>(
        &mut self,
        api: &A,
        repo: &mut R,
        notifier: &mut dyn Notifier,
    ) -> DeleteOutcome
    where
        A: TaskApi + ?Sized,
        R: RowRepository + ?Sized,
    {
        let Some(task_id) = self.pending.clone() else {
            return DeleteOutcome::NoPending;
        };

        if let Err(e) = api.delete_task(&task_id).await {
            warn!(task_id = %task_id, error = %e, "Delete failed");
            notifier.notify(Notice::delete_failed(e.to_string()));
            return DeleteOutcome::Failed(task_id);
        }

        self.pending = None;
        let removed = repo.remove_row(&task_id).is_some();

        self.bus.emit(RowEvent::Deleted {
            task_id: task_id.clone(),
        });
        if let Err(e) = self.bus.unsubscribe_row(&task_id) {
            warn!(task_id = %task_id, error = %e, "Failed to drop row subscriptions");
        }

        if removed {
            info!(task_id = %task_id, "Task deleted");
            DeleteOutcome::Deleted(task_id)
        } else {
            warn!(task_id = %task_id, "Deleted task had no row on the page");
            DeleteOutcome::RowMissing(task_id)
        }
    }
}
