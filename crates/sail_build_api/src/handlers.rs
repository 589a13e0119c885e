//! HTTP request handlers
//!
//! Each handler extracts the HTTP request data, hands it to the domain
//! layer, and translates the result back into an HTTP response. All response
//! bodies on this surface are plain text: the rendered script on success,
//! the exact validation message on failure.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use sail_build_core::{resolve, RawRequest};

use crate::{errors::ApiError, AppState, DOCS_URL};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// Query parameters accepted by the script endpoint.
///
/// Every field is optional; defaults and validation are applied by
/// `sail_build_core` after extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptParams {
    /// PHP version code, e.g. "82"
    pub php: Option<String>,

    /// Laravel version, e.g. "10"
    pub version: Option<String>,

    /// Comma-separated service list
    pub with: Option<String>,

    /// Presence-only flag: any value, including a bare `?devcontainer`,
    /// enables the devcontainer setup step
    pub devcontainer: Option<String>,
}

/// GET /
///
/// Send visitors hitting the bare host to the documentation.
pub async fn docs_redirect() -> impl IntoResponse {
    // axum's Redirect helpers emit 303/307/308; this redirect has always
    // been a plain 302 Found, so build it directly.
    (StatusCode::FOUND, [(header::LOCATION, DOCS_URL)])
}

/// GET /{name}
///
/// Resolve the query parameters into a script configuration and render the
/// install script. Validation failures become plain-text 400 responses with
/// one fixed message per failing field.
pub async fn render_script(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<ScriptParams>,
) -> Result<Response, ApiError> {
    let request = RawRequest {
        name,
        php: params.php,
        version: params.version,
        with: params.with,
        devcontainer: params.devcontainer.is_some(),
    };

    let config = resolve(&request)?;
    let script = template_engine::render(&state.template, &config.placeholders())?;

    tracing::debug!(
        name = %config.name,
        php = %config.php_version,
        laravel = %config.laravel_version,
        "rendered install script"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        script,
    )
        .into_response())
}
