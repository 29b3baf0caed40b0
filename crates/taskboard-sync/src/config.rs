//! Synchronizer configuration.
//!
//! Two deployed variants of the status script disagreed on when a due date
//! counts as "upcoming" and on how the server label is rendered. Both are
//! kept as explicit options here.

use tracing::warn;

/// Warning threshold that only flags tasks due today.
pub const WARN_DUE_TODAY_DAYS: i64 = 0;

/// Warning threshold that flags tasks due within the next two days.
pub const WARN_UPCOMING_DAYS: i64 = 2;

/// Prefix used by `LabelTemplate::status_prefix`.
pub const STATUS_LABEL_PREFIX: &str = "Status: ";

/// Environment variable overriding the warning threshold (in days).
pub const WARN_DAYS_ENV: &str = "TASKBOARD_WARN_DAYS";

/// Environment variable enabling a label prefix.
pub const LABEL_PREFIX_ENV: &str = "TASKBOARD_LABEL_PREFIX";

/// How the server-supplied status label is rendered into the row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelTemplate {
    /// Copy the server label as-is.
    #[default]
    Verbatim,
    /// Prepend a fixed prefix to the server label.
    Prefixed(String),
}

impl LabelTemplate {
    /// Template producing `Status: <label>`.
    pub fn status_prefix() -> Self {
        LabelTemplate::Prefixed(STATUS_LABEL_PREFIX.to_string())
    }

    /// Renders the label text.
    pub fn render(&self, server_label: &str) -> String {
        match self {
            LabelTemplate::Verbatim => server_label.to_string(),
            LabelTemplate::Prefixed(prefix) => format!("{}{}", prefix, server_label),
        }
    }
}

/// Configuration for the task list synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Largest non-negative day difference still shown as a warning.
    pub warning_threshold_days: i64,
    /// Rendering of the status label.
    pub label_template: LabelTemplate,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            warning_threshold_days: WARN_UPCOMING_DAYS,
            label_template: LabelTemplate::Verbatim,
        }
    }
}

impl SyncConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the warning threshold in days.
    pub fn with_warning_threshold_days(mut self, days: i64) -> Self {
        self.warning_threshold_days = days;
        self
    }

    /// Sets the label template.
    pub fn with_label_template(mut self, template: LabelTemplate) -> Self {
        self.label_template = template;
        self
    }

    /// Builds a config from defaults overridden by environment variables.
    ///
    /// - `TASKBOARD_WARN_DAYS`: warning threshold (integer days)
    /// - `TASKBOARD_LABEL_PREFIX`: label prefix (empty means verbatim)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(WARN_DAYS_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(days) => config.warning_threshold_days = days,
                Err(_) => warn!("Ignoring invalid {}={:?}", WARN_DAYS_ENV, raw),
            }
        }

        if let Ok(prefix) = std::env::var(LABEL_PREFIX_ENV) {
            if !prefix.is_empty() {
                config.label_template = LabelTemplate::Prefixed(prefix);
            }
        }

        config
    }
}
