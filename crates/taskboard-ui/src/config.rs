//! Page controller configuration.

use std::time::Duration;

/// Default delay before flash messages close.
pub const DEFAULT_FLASH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration for the page controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// How long flash messages stay visible after page load.
    pub flash_timeout: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flash_timeout: DEFAULT_FLASH_TIMEOUT,
        }
    }
}

impl UiConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flash timeout.
    pub fn with_flash_timeout(mut self, timeout: Duration) -> Self {
        self.flash_timeout = timeout;
        self
    }
}
