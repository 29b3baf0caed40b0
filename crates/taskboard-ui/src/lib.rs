//! Page controllers for the Taskboard task list.
//!
//! Each controller owns one piece of page behavior and talks to the rest of
//! the system through explicit seams:
//! - `StatusController` - status button clicks: request, then synchronize
//! - `DeleteConfirmation` - confirm-before-delete dialog
//! - `FlashMessages` - server flash messages closed after a timeout
//! - `TagInput` - comma-separated tag input with server suggestions
//! - `toggle_description` - expand/collapse a row's description
//!
//! Server access goes through `taskboard_client::TaskApi`, row mutation
//! through `taskboard_sync::RowRepository`, user-visible errors through a
//! `Notifier`, and row events through `taskboard_events::RowEventBus`.

pub mod autocomplete;
pub mod config;
pub mod delete;
pub mod description;
pub mod flash;
pub mod notice;
pub mod status;

pub use autocomplete::TagInput;
pub use config::UiConfig;
pub use delete::{DeleteConfirmation, DeleteOutcome};
pub use description::{toggle_description, ClickTarget};
pub use flash::{FlashLevel, FlashMessage, FlashMessages};
pub use notice::{Notice, NoticeKind, NoticeLog, Notifier};
pub use status::{ClickOutcome, StatusController};

#[cfg(test)]
pub(crate) mod testing;
