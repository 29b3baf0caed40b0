//! StatusController - handles clicks on a row's status buttons.
//!
//! A click sends the status request first and touches the row only after
//! the server confirmed the change. Rejections and transport failures leave
//! the row exactly as it was and surface a notice instead.
//!
//! Requests are not sequenced: two quick clicks on the same row can resolve
//! out of order, and the row ends up showing whichever response arrived
//! last.

use taskboard_client::{StatusOutcome, TaskApi};
use taskboard_events::{RowEvent, RowEventBus};
use taskboard_models::{TaskId, TaskStatus};
use taskboard_sync::{Clock, RowRepository, SyncConfig, SyncError, SystemClock, TaskListSynchronizer};
use tracing::{debug, warn};

use crate::notice::{Notice, Notifier};

/// What a status click ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The server applied the change and the row was synchronized.
    Applied {
        /// Label shown on the row.
        label: String,
    },
    /// The server refused the change; the row is unchanged.
    Rejected {
        /// Server message.
        message: String,
    },
    /// No usable response; the row is unchanged.
    Failed,
    /// The server applied the change but the row is no longer on the page.
    RowMissing,
    /// The click carried no usable task id or status; nothing was sent.
    Ignored,
}

/// Controller for the status buttons of a task list.
pub struct StatusController<A: TaskApi, C: Clock = SystemClock> {
    api: A,
    synchronizer: TaskListSynchronizer<C>,
    bus: RowEventBus,
}

impl<A: TaskApi> StatusController<A> {
    /// Creates a controller using the system clock.
    pub fn new(api: A, config: SyncConfig, bus: RowEventBus) -> Self {
        Self::with_synchronizer(api, TaskListSynchronizer::new(config), bus)
    }
}

impl<A: TaskApi, C: Clock> StatusController<A, C> {
    /// Creates a controller around an existing synchronizer.
    pub fn with_synchronizer(api: A, synchronizer: TaskListSynchronizer<C>, bus: RowEventBus) -> Self {
        Self {
            api,
            synchronizer,
            bus,
        }
    }

    /// Returns the server API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the event bus.
    pub fn bus(&self) -> &RowEventBus {
        &self.bus
    }

    /// Handles a click on a status button.
    ///
    /// `raw_status` is the value carried by the button (`pending`,
    /// `in_progress`, `completed`). Unknown values are ignored without a
    /// request.
    pub async fn handle_click<R: RowRepository + ?Sized>(
        &self,
        repo: &mut R,
        notifier: &mut dyn Notifier,
        task_id: &TaskId,
        raw_status: &str,
    ) -> ClickOutcome {
        if task_id.is_empty() {
            warn!("Status button without task id, ignoring click");
            return ClickOutcome::Ignored;
        }

        let status: TaskStatus = match raw_status.parse() {
            Ok(status) => status,
            Err(e) => {
                warn!(task_id = %task_id, error = %e, "Ignoring status click");
                return ClickOutcome::Ignored;
            }
        };

        debug!(task_id = %task_id, status = %status, "Requesting status change");

        match self.api.update_status(task_id, status).await {
            Ok(StatusOutcome::Applied { label }) => self.apply(repo, task_id, status, label),
            Ok(StatusOutcome::Rejected { message }) => {
                warn!(task_id = %task_id, message = %message, "Status change rejected");
                notifier.notify(Notice::status_change_failed(message.clone()));
                self.bus.emit(RowEvent::StatusRejected {
                    task_id: task_id.clone(),
                    message: message.clone(),
                });
                ClickOutcome::Rejected { message }
            }
            Err(e) => {
                warn!(task_id = %task_id, error = %e, "Status request failed");
                notifier.notify(Notice::network_error(e.to_string()));
                self.bus.emit(RowEvent::StatusFailed {
                    task_id: task_id.clone(),
                    error: e.to_string(),
                });
                ClickOutcome::Failed
            }
        }
    }

    fn apply<R: RowRepository + ?Sized>(
        &self,
        repo: &mut R,
        task_id: &TaskId,
        status: TaskStatus,
        label: String,
    ) -> ClickOutcome {
        match self.synchronizer.apply(repo, task_id, status, &label) {
            Ok(()) => {
                self.bus.emit(RowEvent::StatusApplied {
                    task_id: task_id.clone(),
                    status,
                    label: label.clone(),
                });
                ClickOutcome::Applied { label }
            }
            Err(SyncError::RowNotFound(_)) => ClickOutcome::RowMissing,
            Err(SyncError::EmptyTaskId) => ClickOutcome::Ignored,
        }
    }
}
