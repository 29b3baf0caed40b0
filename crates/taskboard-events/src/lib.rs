//! Row-addressed pub/sub for Taskboard.
//!
//! This crate provides the `RowEventBus` used to wire page controllers
//! together without callbacks:
//! - Thread-safe subscriber storage using `Arc<RwLock<T>>`
//! - Notifications over `mpsc` channels
//! - Subscriptions addressed by task id, plus catch-all subscriptions
//!
//! # Example
//!
//! ```
//! use taskboard_events::{RowEvent, RowEventBus};
//! use taskboard_models::{TaskId, TaskStatus};
//!
//! let bus = RowEventBus::new();
//! let rx = bus.subscribe(&TaskId::from("7"));
//!
//! bus.emit(RowEvent::StatusApplied {
//!     task_id: "7".into(),
//!     status: TaskStatus::Completed,
//!     label: "Completed".into(),
//! });
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.task_id().as_str(), "7");
//! ```

pub mod bus;
pub mod error;
pub mod event;

pub use bus::RowEventBus;
pub use error::{EventError, Result};
pub use event::RowEvent;
