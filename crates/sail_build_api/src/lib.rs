//! Sail Build HTTP API
//!
//! This crate provides the HTTP surface for the install-script service:
//! a documentation redirect on the root path and a script endpoint that
//! turns `GET /{name}` plus query parameters into a ready-to-run shell
//! installer.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - Query and path extraction into `sail_build_core::RawRequest`
//! - Error mapping from validation failures to plain-text 400 responses
//! - Routing and server configuration
//!
//! The dependency flows: HTTP API → business logic, never the reverse.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;

// Re-export key types for convenience
pub use errors::ApiError;
pub use server::{ApiConfig, ApiServer};

use std::sync::Arc;

/// Where the root path sends visitors
pub const DOCS_URL: &str = "https://laravel.com/docs";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Install-script template bundled with the binary
const BUNDLED_TEMPLATE: &str = include_str!("../templates/bootstrap.sh");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Script template source with `{{ ... }}` placeholders
    pub template: Arc<str>,
}

impl AppState {
    /// Create new application state with the given template source
    pub fn new(template: impl Into<Arc<str>>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BUNDLED_TEMPLATE)
    }
}
