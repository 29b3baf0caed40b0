//! Taskboard CLI library.
//!
//! Drives the task list controllers against a board snapshot stored as
//! JSON, either offline (`apply`, `check`) or against a live server
//! (`set-status`, `delete`, `tags`).

pub mod board;
pub mod cli;
pub mod commands;
pub mod error;
