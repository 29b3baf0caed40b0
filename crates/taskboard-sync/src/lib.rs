//! Task list synchronization for Taskboard.
//!
//! This crate applies a server-confirmed status change to the rendered task
//! list:
//! - `TaskListSynchronizer` - updates the status label, button highlighting
//!   and due-date color coding of one row, then reorders it
//! - `RowRepository` - the row store the synchronizer mutates, with the
//!   in-memory `TaskList` implementation
//! - `SyncConfig` - warning threshold and label template
//!
//! # Example
//!
//! ```
//! use taskboard_models::{TaskRow, TaskStatus};
//! use taskboard_sync::{RowRepository, SyncConfig, TaskList, TaskListSynchronizer};
//!
//! let mut list = TaskList::from_rows(vec![
//!     TaskRow::new("1", "Write report", TaskStatus::Pending),
//!     TaskRow::new("2", "Review", TaskStatus::Pending),
//! ]);
//!
//! let sync = TaskListSynchronizer::new(SyncConfig::default());
//! sync.apply(&mut list, &"1".into(), TaskStatus::Completed, "Completed").unwrap();
//!
//! assert_eq!(list.rows()[1].id.as_str(), "1");
//! assert!(list.is_well_ordered());
//! ```

pub mod clock;
pub mod config;
pub mod due_date;
pub mod error;
pub mod ordering;
pub mod repository;
pub mod synchronizer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{LabelTemplate, SyncConfig, WARN_DUE_TODAY_DAYS, WARN_UPCOMING_DAYS};
pub use due_date::{classify_due, days_until};
pub use error::{Result, SyncError};
pub use ordering::is_well_ordered;
pub use repository::{RowRepository, TaskList};
pub use synchronizer::TaskListSynchronizer;
