//! HTTP client for the Taskboard server endpoints.
//!
//! - `TaskClient` - status update, delete and tag autocomplete requests
//! - `TaskApi` - the async trait page controllers program against
//! - `csrf` - CSRF token extraction from the cookie header
//!
//! # Example
//!
//! ```ignore
//! use taskboard_client::{ClientConfig, TaskApi, TaskClient};
//! use taskboard_models::{TaskId, TaskStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:8000")?;
//!     let client = TaskClient::new(config)?.with_cookie_header("csrftoken=abc123");
//!
//!     let outcome = client
//!         .update_status(&TaskId::from("42"), TaskStatus::Completed)
//!         .await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod csrf;
pub mod error;
pub mod types;

pub use api::TaskApi;
pub use client::TaskClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, LEGACY_STATUS_PATH};
pub use csrf::{token_from_cookies, CSRF_COOKIE, CSRF_HEADER};
pub use error::{ClientError, Result};
pub use types::{StatusOutcome, StatusUpdateResponse};
