//! reqwest-backed implementation of `TaskApi`.

use async_trait::async_trait;
use taskboard_models::{TaskId, TaskStatus};
use tracing::{debug, trace, warn};

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::csrf::{token_from_cookies, CSRF_HEADER};
use crate::error::{ClientError, Result};
use crate::types::{StatusOutcome, StatusUpdateResponse};

/// HTTP client for the task endpoints.
#[derive(Clone)]
pub struct TaskClient {
    client: reqwest::Client,
    config: ClientConfig,
    csrf_token: Option<String>,
}

impl TaskClient {
    /// Creates a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            csrf_token: None,
        })
    }

    /// Sets the CSRF token sent with state-changing requests.
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Reads the CSRF token from a `Cookie` header string.
    ///
    /// Leaves the token unset if the configured cookie is absent.
    pub fn with_cookie_header(mut self, cookie_header: &str) -> Self {
        self.csrf_token = token_from_cookies(cookie_header, &self.config.csrf_cookie);
        if self.csrf_token.is_none() {
            warn!(cookie = %self.config.csrf_cookie, "CSRF cookie not found");
        }
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the CSRF token, if one is set.
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    fn post(&self, url: url::Url) -> reqwest::RequestBuilder {
        let request = self.client.post(url);
        match &self.csrf_token {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn update_status(&self, task_id: &TaskId, status: TaskStatus) -> Result<StatusOutcome> {
        let url = self.config.status_url(task_id.as_str())?;
        debug!(task_id = %task_id, status = %status, %url, "Sending status update");

        let response = self
            .post(url)
            .form(&[("status", status.as_str())])
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;
        trace!(%http_status, body = %body, "Status update response");

        // The server reports business failures in the JSON body, whatever
        // the HTTP status.
        match serde_json::from_str::<StatusUpdateResponse>(&body) {
            Ok(parsed) => Ok(parsed.into_outcome(status)),
            Err(_) if !http_status.is_success() => Err(ClientError::Status(http_status.as_u16())),
            Err(e) => Err(ClientError::Decode(e.to_string())),
        }
    }

    async fn delete_task(&self, task_id: &TaskId) -> Result<()> {
        let url = self.config.delete_url(task_id.as_str())?;
        debug!(task_id = %task_id, %url, "Sending delete");

        let response = self.post(url).send().await?;
        let http_status = response.status();
        if !http_status.is_success() {
            return Err(ClientError::Status(http_status.as_u16()));
        }
        Ok(())
    }

    async fn autocomplete_tags(&self, term: &str) -> Result<Vec<String>> {
        let url = self.config.autocomplete_url(term)?;
        trace!(%url, "Fetching tag suggestions");

        let response = self.client.get(url).send().await?;
        let http_status = response.status();
        if !http_status.is_success() {
            return Err(ClientError::Status(http_status.as_u16()));
        }

        let tags: Vec<String> = response.json().await?;
        Ok(tags)
    }
}
