use thiserror::Error;

use crate::catalog;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// A script request parameter that failed validation.
///
/// Each variant's display string is the exact plain-text message sent back
/// to the client. At most one failure is reported per request; when several
/// parameters are bad, the resolver reports the highest-priority field
/// (name, then php, then version, then with).
///
/// All variants are client errors. There is no internal-fault variant here:
/// resolution is a total function over the static catalog tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The site name contains characters outside the allowed alphabet.
    #[error("Invalid site name. Please only use alpha-numeric characters, dashes, and underscores.")]
    InvalidSiteName,

    /// The requested PHP version is not a supported code.
    #[error("Invalid PHP version. Please specify a supported version (74, 80, 81, 82, 83, or 84).")]
    InvalidPhpVersion,

    /// The requested Laravel version is not compatible with the resolved
    /// PHP version.
    ///
    /// Carries the pieces of the message that depend on the request: the
    /// PHP version in dotted form and the versions that would have been
    /// accepted, taken from that PHP version's own matrix entry.
    #[error("Invalid Laravel version for PHP {php}. Please specify a supported version ({supported}).")]
    InvalidLaravelVersion {
        /// Resolved PHP version in dotted form, e.g. "8.2"
        php: String,
        /// Compatible Laravel versions, comma-joined with "or" before the
        /// final item
        supported: String,
    },

    /// The service selection names something outside the catalog, or mixes
    /// the "none" sentinel with real services.
    #[error("Invalid service name. Please provide one or more of the supported services ({supported}) or \"none\".")]
    InvalidServiceSelection {
        /// Comma-joined service catalog
        supported: String,
    },
}

impl ValidationFailure {
    /// Build the invalid-Laravel-version failure for a resolved PHP code.
    ///
    /// The suggested versions come from `php_code`'s own compatibility
    /// entry, not the fallback set used for validation, so the message
    /// never recommends versions the caller's PHP cannot run.
    pub(crate) fn laravel_version(php_code: &str) -> Self {
        Self::InvalidLaravelVersion {
            php: format_php_version(php_code),
            supported: join_with_or(catalog::compatible_laravel_versions(php_code)),
        }
    }

    /// Build the invalid-service failure, enumerating the full catalog.
    pub(crate) fn service_selection() -> Self {
        Self::InvalidServiceSelection {
            supported: catalog::AVAILABLE_SERVICES.join(", "),
        }
    }
}

/// Split a PHP version code into dotted major.minor form: "82" becomes "8.2".
///
/// Codes that are too short to split are passed through unchanged.
fn format_php_version(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(major) if !chars.as_str().is_empty() => format!("{}.{}", major, chars.as_str()),
        _ => code.to_string(),
    }
}

/// Join items with commas, using "or" before the final item.
///
/// A single item is returned verbatim: ["9", "10", "11"] becomes
/// "9, 10 or 11" while ["11"] stays "11".
fn join_with_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
    }
}
