//! Command-line interface definition using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use taskboard_client::{ClientConfig, DEFAULT_BASE_URL};
use taskboard_sync::{LabelTemplate, SyncConfig};

use crate::board::BoardStore;

/// Taskboard - keep a task list in sync with its server
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the board snapshot (default: <config dir>/board.json)
    #[arg(short, long, env = "TASKBOARD_BOARD", global = true)]
    pub board: Option<PathBuf>,

    /// Config directory
    #[arg(long, env = "TASKBOARD_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Server base URL
    #[arg(long, env = "TASKBOARD_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Status-update path template ({id} is replaced by the task id)
    #[arg(long, env = "TASKBOARD_STATUS_PATH", global = true)]
    pub status_path: Option<String>,

    /// CSRF token sent with POST requests
    #[arg(long, env = "TASKBOARD_CSRF_TOKEN", global = true, hide_env_values = true)]
    pub csrf_token: Option<String>,

    /// Cookie header to read the CSRF token from (e.g. "csrftoken=abc")
    #[arg(long, env = "TASKBOARD_COOKIE", global = true, hide_env_values = true)]
    pub cookie: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Days ahead a due date still shows as a warning
    #[arg(long, env = "TASKBOARD_WARN_DAYS", global = true)]
    pub warn_days: Option<i64>,

    /// Render status labels as "Status: <label>"
    #[arg(long, global = true)]
    pub prefix_label: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    Show {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Apply a status change the server already confirmed
    Apply {
        /// Task ID
        id: String,
        /// New status (pending, in_progress, completed)
        status: String,
        /// Label returned by the server
        label: String,
    },

    /// Request a status change from the server and apply it
    SetStatus {
        /// Task ID
        id: String,
        /// New status (pending, in_progress, completed)
        status: String,
    },

    /// Delete a task on the server and remove its row
    Delete {
        /// Task ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Suggest tags for the last term of a comma-separated input
    Tags {
        /// Current tag input, e.g. "urgent, ho"
        input: String,
    },

    /// Verify the board ordering
    Check,
}

/// Output format for `show`
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the config directory, using `~/.taskboard` if not specified.
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".taskboard"))
                .unwrap_or_else(|| PathBuf::from(".taskboard"))
        })
    }

    /// Returns the board store.
    pub fn board_store(&self) -> BoardStore {
        match &self.board {
            Some(path) => BoardStore::new(path),
            None => BoardStore::in_dir(&self.config_dir()),
        }
    }

    /// Builds the synchronizer configuration from flags and environment.
    pub fn sync_config(&self) -> SyncConfig {
        let mut config = SyncConfig::from_env();
        if let Some(days) = self.warn_days {
            config = config.with_warning_threshold_days(days);
        }
        if self.prefix_label {
            config = config.with_label_template(LabelTemplate::status_prefix());
        }
        config
    }

    /// Builds the HTTP client configuration from flags.
    pub fn client_config(&self) -> taskboard_client::Result<ClientConfig> {
        let mut config = ClientConfig::new(&self.base_url)?;
        if let Some(path) = &self.status_path {
            config = config.with_status_path(path.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
