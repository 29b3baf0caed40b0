//! In-memory `TaskApi` used by controller tests.

use std::sync::Mutex;

use async_trait::async_trait;
use taskboard_client::{ClientError, Result, StatusOutcome, TaskApi};
use taskboard_models::{TaskId, TaskStatus};

/// Canned answer to a status request.
#[derive(Debug, Clone)]
pub(crate) enum StatusReply {
    Applied(&'static str),
    Rejected(&'static str),
    Unreachable,
}

pub(crate) struct FakeApi {
    pub status: StatusReply,
    pub delete_ok: bool,
    pub tags: Vec<String>,
    pub tags_fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new(status: StatusReply) -> Self {
        Self {
            status,
            delete_ok: true,
            tags: Vec::new(),
            tags_fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn update_status(&self, task_id: &TaskId, status: TaskStatus) -> Result<StatusOutcome> {
        self.record(format!("status {} {}", task_id, status));
        match &self.status {
            StatusReply::Applied(label) => Ok(StatusOutcome::Applied {
                label: label.to_string(),
            }),
            StatusReply::Rejected(message) => Ok(StatusOutcome::Rejected {
                message: message.to_string(),
            }),
            StatusReply::Unreachable => Err(ClientError::Transport("connection refused".into())),
        }
    }

    async fn delete_task(&self, task_id: &TaskId) -> Result<()> {
        self.record(format!("delete {}", task_id));
        if self.delete_ok {
            Ok(())
        } else {
            Err(ClientError::Status(500))
        }
    }

    async fn autocomplete_tags(&self, term: &str) -> Result<Vec<String>> {
        self.record(format!("tags {}", term));
        if self.tags_fail {
            return Err(ClientError::Transport("timed out".into()));
        }
        Ok(self
            .tags
            .iter()
            .filter(|t| t.starts_with(term))
            .cloned()
            .collect())
    }
}
