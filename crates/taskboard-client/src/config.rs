//! Client configuration.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::csrf::CSRF_COOKIE;
use crate::error::Result;

/// Default server base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Status-update path used by the task app's own routes.
pub const DEFAULT_STATUS_PATH: &str = "/tasks/{id}/update-status/";

/// Status-update path used when the task app is mounted at the site root.
pub const LEGACY_STATUS_PATH: &str = "/{id}/update-status/";

/// Delete path template.
pub const DEFAULT_DELETE_PATH: &str = "/delete/{id}/";

/// Tag autocomplete path.
pub const DEFAULT_AUTOCOMPLETE_PATH: &str = "/tasks/tags/autocomplete/";

/// Characters escaped when a task id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Configuration for `TaskClient`.
///
/// Path templates are absolute paths on the server; `{id}` is replaced by
/// the escaped task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL.
    pub base_url: Url,
    /// Status-update path template.
    pub status_path: String,
    /// Delete path template.
    pub delete_path: String,
    /// Tag autocomplete path.
    pub autocomplete_path: String,
    /// Cookie the CSRF token is read from.
    pub csrf_cookie: String,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            status_path: DEFAULT_STATUS_PATH.to_string(),
            delete_path: DEFAULT_DELETE_PATH.to_string(),
            autocomplete_path: DEFAULT_AUTOCOMPLETE_PATH.to_string(),
            csrf_cookie: CSRF_COOKIE.to_string(),
            timeout: None,
        })
    }

    /// Sets the status-update path template.
    pub fn with_status_path(mut self, template: impl Into<String>) -> Self {
        self.status_path = template.into();
        self
    }

    /// Sets the delete path template.
    pub fn with_delete_path(mut self, template: impl Into<String>) -> Self {
        self.delete_path = template.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the status-update URL for a task.
    pub fn status_url(&self, task_id: &str) -> Result<Url> {
        self.expand(&self.status_path, task_id)
    }

    /// Returns the delete URL for a task.
    pub fn delete_url(&self, task_id: &str) -> Result<Url> {
        self.expand(&self.delete_path, task_id)
    }

    /// Returns the autocomplete URL for a search term.
    pub fn autocomplete_url(&self, term: &str) -> Result<Url> {
        let mut url = self.base_url.join(&self.autocomplete_path)?;
        url.query_pairs_mut().append_pair("term", term);
        Ok(url)
    }

    fn expand(&self, template: &str, task_id: &str) -> Result<Url> {
        let segment = utf8_percent_encode(task_id, PATH_SEGMENT).to_string();
        let path = template.replace("{id}", &segment);
        Ok(self.base_url.join(&path)?)
    }
}
