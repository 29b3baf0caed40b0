//! User-visible notices.

use std::fmt;

/// What kind of failure a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The server refused a status change.
    StatusChangeFailed,
    /// A request never produced a usable answer.
    NetworkError,
    /// A delete request failed.
    DeleteFailed,
}

/// A message shown to the user after a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notice kind.
    pub kind: NoticeKind,
    /// Server message (shown verbatim) or error detail.
    pub message: String,
}

impl Notice {
    /// The server refused a status change with `message`.
    pub fn status_change_failed(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::StatusChangeFailed,
            message: message.into(),
        }
    }

    /// A request failed in transport.
    pub fn network_error(detail: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::NetworkError,
            message: detail.into(),
        }
    }

    /// A delete request failed.
    pub fn delete_failed(detail: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::DeleteFailed,
            message: detail.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::StatusChangeFailed => write!(f, "Status change failed: {}", self.message),
            NoticeKind::NetworkError => f.write_str("Network error while changing status"),
            NoticeKind::DeleteFailed => f.write_str("Failed to delete task"),
        }
    }
}

/// Sink for user-visible notices.
pub trait Notifier {
    /// Shows a notice to the user.
    fn notify(&mut self, notice: Notice);
}

/// Notifier that keeps notices in memory.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns the most recent notice.
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Removes and returns all notices.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_failed_text_contains_message() {
        let notice = Notice::status_change_failed("X");
        assert_eq!(notice.to_string(), "Status change failed: X");
        assert_eq!(notice.message, "X");
    }

    #[test]
    fn test_generic_texts() {
        assert_eq!(
            Notice::network_error("connection refused").to_string(),
            "Network error while changing status"
        );
        assert_eq!(Notice::delete_failed("HTTP 500").to_string(), "Failed to delete task");
    }

    #[test]
    fn test_notice_log() {
        let mut log = NoticeLog::new();
        assert!(log.is_empty());

        log.notify(Notice::network_error("a"));
        log.notify(Notice::status_change_failed("b"));

        assert_eq!(log.notices().len(), 2);
        assert_eq!(log.last().unwrap().message, "b");

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }
}
