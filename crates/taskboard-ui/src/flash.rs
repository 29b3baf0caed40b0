//! Server flash messages.
//!
//! Messages rendered with the page close on their own once the flash
//! timeout has elapsed since page load. Closing is idempotent.

use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::debug;

use crate::config::UiConfig;

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashLevel {
    /// Neutral information.
    #[default]
    Info,
    /// An action succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// An action failed.
    Error,
}

impl FlashLevel {
    /// Alert class for the level.
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashLevel::Info => "alert-info",
            FlashLevel::Success => "alert-success",
            FlashLevel::Warning => "alert-warning",
            FlashLevel::Error => "alert-danger",
        }
    }
}

/// One flash message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    /// Severity.
    pub level: FlashLevel,
    /// Message text.
    pub text: String,
    /// Whether the message has been closed.
    pub closed: bool,
}

impl FlashMessage {
    /// Creates an open message.
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            closed: false,
        }
    }
}

/// Flash messages of one page load.
#[derive(Debug, Clone)]
pub struct FlashMessages {
    messages: Vec<FlashMessage>,
    timeout: Duration,
    loaded_at: Instant,
}

impl FlashMessages {
    /// Starts the timeout clock now.
    pub fn new(timeout: Duration) -> Self {
        Self {
            messages: Vec::new(),
            timeout,
            loaded_at: Instant::now(),
        }
    }

    /// Starts the clock with the configured flash timeout.
    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.flash_timeout)
    }

    /// Adds a message rendered with the page.
    pub fn push(&mut self, message: FlashMessage) {
        self.messages.push(message);
    }

    /// Returns all messages, closed ones included.
    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Returns the messages still on screen.
    pub fn visible(&self) -> Vec<&FlashMessage> {
        self.messages.iter().filter(|m| !m.closed).collect()
    }

    /// Instant at which every message closes.
    pub fn deadline(&self) -> Instant {
        self.loaded_at + self.timeout
    }

    /// Closes every message if the deadline has passed at `now`.
    ///
    /// Returns the number of messages closed by this call.
    pub fn close_expired(&mut self, now: Instant) -> usize {
        if now < self.deadline() {
            return 0;
        }
        self.close_all()
    }

    /// Closes every open message.
    pub fn close_all(&mut self) -> usize {
        let mut closed = 0;
        for message in self.messages.iter_mut().filter(|m| !m.closed) {
            message.closed = true;
            closed += 1;
        }
        if closed > 0 {
            debug!(closed, "Closed flash messages");
        }
        closed
    }

    /// Waits for the deadline, then closes every message.
    pub async fn auto_close(&mut self) -> usize {
        time::sleep_until(self.deadline()).await;
        self.close_all()
    }
}
