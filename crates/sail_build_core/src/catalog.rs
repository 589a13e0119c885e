//! Static tables describing what a script request may ask for.
//!
//! All tables are fixed at build time and read-only. The compatibility
//! matrix and the service catalog mirror what Laravel Sail actually ships.

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// PHP versions the installer images exist for, oldest first.
///
/// The last entry is the default for requests that do not pin a version.
pub const SUPPORTED_PHP_VERSIONS: &[&str] = &["74", "80", "81", "82", "83", "84"];

/// Sail services that can be requested through the `with` parameter.
pub const AVAILABLE_SERVICES: &[&str] = &[
    "mysql",
    "pgsql",
    "mariadb",
    "redis",
    "valkey",
    "memcached",
    "meilisearch",
    "typesense",
    "minio",
    "mailpit",
    "selenium",
    "soketi",
];

/// Service sentinel meaning "install no services at all".
///
/// Only valid as the sole selected service, never combined with others.
pub const NO_SERVICES_SENTINEL: &str = "none";

/// Services installed when the request does not name any.
pub const DEFAULT_SERVICES: &str = "mysql,redis,meilisearch,mailpit,selenium";

/// Laravel versions known to work with each PHP version, oldest first.
///
/// Invariant: every entry is non-empty and ends with the latest release for
/// that PHP version.
const LARAVEL_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("74", &["8"]),
    ("80", &["8", "9"]),
    ("81", &["8", "9", "10"]),
    ("82", &["9", "10", "11"]),
    ("83", &["10", "11"]),
    ("84", &["11"]),
];

/// The PHP version used when a request does not pin one.
pub fn default_php_version() -> &'static str {
    SUPPORTED_PHP_VERSIONS[SUPPORTED_PHP_VERSIONS.len() - 1]
}

/// Whether `php` is one of the supported PHP version codes.
pub fn is_supported_php_version(php: &str) -> bool {
    SUPPORTED_PHP_VERSIONS.contains(&php)
}

/// The compatibility matrix entry for `php`, if it is a recognized code.
pub fn laravel_versions(php: &str) -> Option<&'static [&'static str]> {
    LARAVEL_COMPATIBILITY
        .iter()
        .find(|(code, _)| *code == php)
        .map(|(_, versions)| *versions)
}

/// Laravel versions considered valid for `php`.
///
/// Unrecognized codes fall back to the default PHP version's entry, so the
/// result can always be used both for validation and for "did you mean"
/// error text.
pub fn compatible_laravel_versions(php: &str) -> &'static [&'static str] {
    match laravel_versions(php) {
        Some(versions) => versions,
        None => {
            let (_, versions) = LARAVEL_COMPATIBILITY[LARAVEL_COMPATIBILITY.len() - 1];
            versions
        }
    }
}

/// The newest Laravel version compatible with `php`.
pub fn latest_laravel_version(php: &str) -> &'static str {
    let versions = compatible_laravel_versions(php);
    versions[versions.len() - 1]
}

/// Map a legacy single-field Laravel version to the PHP version it implies.
///
/// Consulted only when a request carries `version` without an explicit
/// `php`; kept for scripts generated before the two-field scheme existed.
pub fn php_for_legacy_version(version: &str) -> Option<&'static str> {
    match version {
        "8" => Some("81"),
        "9" => Some("82"),
        "10" => Some("83"),
        "11" => Some("84"),
        _ => None,
    }
}

/// Whether `name` is a recognized Sail service.
pub fn is_available_service(name: &str) -> bool {
    AVAILABLE_SERVICES.contains(&name)
}
