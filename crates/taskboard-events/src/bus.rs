//! RowEventBus - row-addressed pub/sub.
//!
//! Concurrency patterns:
//! - `Arc<RwLock<T>>` for the subscriber tables
//! - `mpsc` channels for delivery, one channel per subscription

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};

use taskboard_models::TaskId;
use tracing::trace;

use crate::error::{EventError, Result};
use crate::event::RowEvent;

/// Event bus addressing subscribers by task id.
///
/// Row subscribers only see events for their own task; catch-all subscribers
/// see everything. Receivers that were dropped are pruned on the next emit.
#[derive(Clone, Default)]
pub struct RowEventBus {
    /// Subscriptions keyed by task id.
    rows: Arc<RwLock<HashMap<TaskId, Vec<Sender<RowEvent>>>>>,
    /// Subscriptions receiving every event.
    all: Arc<RwLock<Vec<Sender<RowEvent>>>>,
}

impl RowEventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to events addressed to one task row.
    pub fn subscribe(&self, task_id: &TaskId) -> Receiver<RowEvent> {
        let (tx, rx) = mpsc::channel();

        if let Ok(mut rows) = self.rows.write() {
            rows.entry(task_id.clone()).or_default().push(tx);
        }

        rx
    }

    /// Subscribes to every event on the bus.
    pub fn subscribe_all(&self) -> Receiver<RowEvent> {
        let (tx, rx) = mpsc::channel();

        if let Ok(mut all) = self.all.write() {
            all.push(tx);
        }

        rx
    }

    /// Publishes an event.
    ///
    /// # Returns
    ///
    /// The number of subscribers the event was delivered to.
    pub fn emit(&self, event: RowEvent) -> usize {
        let mut delivered = 0;

        if let Ok(mut rows) = self.rows.write() {
            if let Some(subs) = rows.get_mut(event.task_id()) {
                subs.retain(|tx| tx.send(event.clone()).is_ok());
                delivered += subs.len();
                if subs.is_empty() {
                    rows.remove(event.task_id());
                }
            }
        }

        if let Ok(mut all) = self.all.write() {
            all.retain(|tx| tx.send(event.clone()).is_ok());
            delivered += all.len();
        }

        trace!(task_id = %event.task_id(), delivered, "emitted row event");
        delivered
    }

    /// Drops every subscription for one task row (e.g. after deletion).
    pub fn unsubscribe_row(&self, task_id: &TaskId) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))?;
        rows.remove(task_id);
        Ok(())
    }

    /// Returns the number of live row subscriptions for a task.
    pub fn subscriber_count(&self, task_id: &TaskId) -> usize {
        self.rows
            .read()
            .map(|rows| rows.get(task_id).map_or(0, |subs| subs.len()))
            .unwrap_or(0)
    }
}
