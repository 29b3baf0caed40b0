//! Core data models for Taskboard.
//!
//! This crate provides the types shared by every Taskboard crate: task
//! identifiers, the closed set of task statuses with their button styles,
//! due-date styles, and the `TaskRow` record that mirrors one rendered row
//! of the task list.

pub mod due;
pub mod ids;
pub mod row;
pub mod status;

// Re-export main types
pub use due::{parse_due_date, DueDisplay, DueStyle};
pub use ids::TaskId;
pub use row::{Description, StatusButton, TaskRow};
pub use status::{ButtonVariant, ParseStatusError, TaskStatus, ALL_STATUSES};
