//! TaskListSynchronizer - applies a confirmed status change to one row.
//!
//! The four updates (label, buttons, due-date style, position) run under a
//! single `&mut` borrow of the repository, so no observer can see a
//! half-updated row.

use chrono::NaiveDate;
use taskboard_models::{ButtonVariant, TaskId, TaskRow, TaskStatus};
use tracing::{debug, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SyncConfig;
use crate::due_date::classify_due;
use crate::error::{Result, SyncError};
use crate::repository::RowRepository;

/// Synchronizes a row's visual state with a server-confirmed status.
///
/// Call `apply` only after the server acknowledged the change; a rejected or
/// failed request must leave the row untouched, so there is nothing to roll
/// back.
#[derive(Debug, Clone)]
pub struct TaskListSynchronizer<C: Clock = SystemClock> {
    config: SyncConfig,
    clock: C,
}

impl TaskListSynchronizer<SystemClock> {
    /// Creates a synchronizer using the system clock.
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TaskListSynchronizer<C> {
    /// Creates a synchronizer with a custom clock.
    pub fn with_clock(config: SyncConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Applies a confirmed status change.
    ///
    /// # Arguments
    ///
    /// * `repo` - Row store holding the task list
    /// * `task_id` - Row to update; must match exactly one row
    /// * `new_status` - Status acknowledged by the server
    /// * `server_label` - Display label supplied by the server
    ///
    /// # Errors
    ///
    /// `SyncError::RowNotFound` if no row carries `task_id`, in which case
    /// nothing is mutated.
    pub fn apply<R: RowRepository + ?Sized>(
        &self,
        repo: &mut R,
        task_id: &TaskId,
        new_status: TaskStatus,
        server_label: &str,
    ) -> Result<()> {
        if task_id.is_empty() {
            return Err(SyncError::EmptyTaskId);
        }

        let today = self.clock.today();
        let label = self.config.label_template.render(server_label);

        let due_date = {
            let Some(row) = repo.find_row_mut(task_id) else {
                warn!(task_id = %task_id, "Task row not found, skipping status update");
                return Err(SyncError::RowNotFound(task_id.to_string()));
            };

            update_status_label(row, label);
            update_status_buttons(row, new_status);
            update_due_style(row, new_status, today, self.config.warning_threshold_days);
            row.due_date
        };

        repo.reorder(task_id, new_status, due_date)?;

        debug!(task_id = %task_id, status = %new_status, "Applied status change");
        Ok(())
    }
}

fn update_status_label(row: &mut TaskRow, label: String) {
    match row.status_label.as_mut() {
        Some(text) => *text = label,
        None => warn!(task_id = %row.id, "Status label element missing"),
    }
}

fn update_status_buttons(row: &mut TaskRow, new_status: TaskStatus) {
    let Some(buttons) = row.buttons.as_mut() else {
        warn!(task_id = %row.id, "Status button group missing");
        return;
    };

    for button in buttons.iter_mut() {
        button.variant = Some(if button.status == new_status {
            ButtonVariant::Solid
        } else {
            ButtonVariant::Outline
        });
    }
}

fn update_due_style(row: &mut TaskRow, new_status: TaskStatus, today: NaiveDate, threshold: i64) {
    let style = classify_due(new_status, row.due_date, today, threshold);
    match row.due_display.as_mut() {
        Some(display) => display.style = Some(style),
        None => trace!(task_id = %row.id, "No due-date display"),
    }
}
