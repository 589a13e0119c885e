//! Query-parameter resolution for install-script requests.
//!
//! [`resolve`] applies defaults, maps legacy version aliases, checks the
//! result against the compatibility matrix and service catalog, and returns
//! either a [`ResolvedConfig`] or the first [`ValidationFailure`] in field
//! priority order (name, php, version, with).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::errors::ValidationFailure;

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Literal substituted for the devcontainer placeholder when the flag is set.
const DEVCONTAINER_OPTION: &str = "--devcontainer";

/// Raw, untyped query input for a script request.
///
/// Fields arrive exactly as the HTTP layer extracted them; nothing is
/// trusted yet. `devcontainer` is already a presence flag because the query
/// parameter carries no meaningful value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    /// Requested project name, taken from the URL path
    pub name: String,

    /// Explicit PHP version code, e.g. "82"
    pub php: Option<String>,

    /// Requested Laravel version, e.g. "10"; doubles as a legacy PHP
    /// selector when `php` is absent
    pub version: Option<String>,

    /// Comma-separated service list
    pub with: Option<String>,

    /// Whether the devcontainer query flag was present
    pub devcontainer: bool,
}

/// A fully validated script configuration, ready for template rendering.
///
/// Constructed once per request by [`resolve`], handed to the renderer, and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Validated project name
    pub name: String,

    /// Supported PHP version code, e.g. "82"
    pub php_version: String,

    /// Laravel version compatible with `php_version`, e.g. "10"
    pub laravel_version: String,

    /// Deduplicated services in first-occurrence order
    pub services: Vec<String>,

    /// Whether to pass the devcontainer option through to the script
    pub devcontainer: bool,
}

impl ResolvedConfig {
    /// Build the placeholder map consumed by the template renderer.
    ///
    /// The formats are part of the script contract: the Laravel version
    /// becomes a caret range lower bound ("10" renders as "^100"), the
    /// service list is emitted both comma-joined (for `sail:install
    /// --with=`) and space-joined (for `sail pull`), and the devcontainer
    /// flag becomes either the literal option or an empty string.
    pub fn placeholders(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        values.insert("php".to_string(), self.php_version.clone());
        values.insert("version".to_string(), format!("^{}0", self.laravel_version));
        values.insert("name".to_string(), self.name.clone());
        values.insert("with".to_string(), self.services.join(","));
        values.insert(
            "devcontainer".to_string(),
            if self.devcontainer {
                DEVCONTAINER_OPTION.to_string()
            } else {
                String::new()
            },
        );
        values.insert("services".to_string(), self.services.join(" "));
        values
    }
}

/// Resolve a raw request into a validated configuration.
///
/// Resolution order:
///
/// 1. PHP version: an explicit `php` is taken verbatim (invalid codes are
///    caught below); otherwise a legacy `version` picks the PHP version it
///    implies, with unrecognized values falling back to the default; with
///    neither present the default applies.
/// 2. Laravel version: an absent `version` defaults to the newest release
///    compatible with the resolved PHP version.
/// 3. Services: the `with` list (or the default set) is split on commas and
///    deduplicated, keeping first-occurrence order.
/// 4. Validation, first failure wins: name, then php, then version, then
///    with.
pub fn resolve(request: &RawRequest) -> Result<ResolvedConfig, ValidationFailure> {
    let php = match (&request.php, &request.version) {
        (Some(php), _) => php.clone(),
        (None, Some(version)) => catalog::php_for_legacy_version(version)
            .unwrap_or_else(catalog::default_php_version)
            .to_string(),
        (None, None) => catalog::default_php_version().to_string(),
    };

    let laravel = match &request.version {
        Some(version) => version.clone(),
        None => catalog::latest_laravel_version(&php).to_string(),
    };

    let services = split_services(request.with.as_deref().unwrap_or(catalog::DEFAULT_SERVICES));

    if !is_valid_site_name(&request.name) {
        return Err(ValidationFailure::InvalidSiteName);
    }

    if !catalog::is_supported_php_version(&php) {
        return Err(ValidationFailure::InvalidPhpVersion);
    }

    if !catalog::compatible_laravel_versions(&php).contains(&laravel.as_str()) {
        return Err(ValidationFailure::laravel_version(&php));
    }

    if !is_valid_service_selection(&services) {
        return Err(ValidationFailure::service_selection());
    }

    Ok(ResolvedConfig {
        name: request.name.clone(),
        php_version: php,
        laravel_version: laravel,
        services,
        devcontainer: request.devcontainer,
    })
}

/// Split a comma-separated service list, dropping repeats but keeping
/// first-occurrence order. Entries are not trimmed; " redis" is a different
/// (and invalid) name than "redis".
fn split_services(with: &str) -> Vec<String> {
    let mut services: Vec<String> = Vec::new();
    for service in with.split(',') {
        if !services.iter().any(|seen| seen == service) {
            services.push(service.to_string());
        }
    }
    services
}

/// Site names end up in shell commands and container names: ASCII
/// alphanumerics, dashes, and underscores only, and never empty.
fn is_valid_site_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// The sentinel "none" is only valid alone; otherwise every entry must be a
/// catalog service.
fn is_valid_service_selection(services: &[String]) -> bool {
    if let [only] = services {
        if only == catalog::NO_SERVICES_SENTINEL {
            return true;
        }
    }
    services
        .iter()
        .all(|service| catalog::is_available_service(service))
}
