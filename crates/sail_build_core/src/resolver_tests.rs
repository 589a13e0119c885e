//! Tests for resolver module

use super::*;

/// A request for "demo" with nothing else set.
fn demo_request() -> RawRequest {
    RawRequest {
        name: "demo".to_string(),
        ..RawRequest::default()
    }
}

// ============================================================================
// Default resolution
// ============================================================================

#[test]
fn bare_request_resolves_to_newest_stack() {
    let config = resolve(&demo_request()).unwrap();

    assert_eq!(config.php_version, "84");
    assert_eq!(config.laravel_version, "11");
    assert_eq!(
        config.services,
        vec!["mysql", "redis", "meilisearch", "mailpit", "selenium"]
    );
    assert!(!config.devcontainer);
}

#[test]
fn bare_request_matches_explicit_default_request() {
    let explicit = RawRequest {
        php: Some("84".to_string()),
        version: Some("11".to_string()),
        ..demo_request()
    };

    assert_eq!(resolve(&demo_request()), resolve(&explicit));
}

#[test]
fn missing_version_defaults_to_latest_for_requested_php() {
    let request = RawRequest {
        php: Some("81".to_string()),
        ..demo_request()
    };

    let config = resolve(&request).unwrap();
    assert_eq!(config.php_version, "81");
    assert_eq!(config.laravel_version, "10");
}

// ============================================================================
// Legacy version aliases
// ============================================================================

#[test]
fn legacy_version_without_php_selects_the_implied_php() {
    for (version, php) in [("8", "81"), ("9", "82"), ("10", "83"), ("11", "84")] {
        let request = RawRequest {
            version: Some(version.to_string()),
            ..demo_request()
        };

        let config = resolve(&request).unwrap();
        assert_eq!(config.php_version, php, "legacy version {}", version);
        assert_eq!(config.laravel_version, version);
    }
}

#[test]
fn unrecognized_legacy_version_falls_back_to_default_php() {
    // "7" is not an alias; the default PHP version applies, and "7" then
    // fails the compatibility check against that version's matrix entry.
    let request = RawRequest {
        version: Some("7".to_string()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::laravel_version("84"))
    );
}

#[test]
fn explicit_php_wins_over_legacy_alias() {
    let request = RawRequest {
        php: Some("82".to_string()),
        version: Some("10".to_string()),
        ..demo_request()
    };

    let config = resolve(&request).unwrap();
    assert_eq!(config.php_version, "82");
    assert_eq!(config.laravel_version, "10");
}

// ============================================================================
// Validation: name
// ============================================================================

#[test]
fn names_with_dashes_and_underscores_are_accepted() {
    let request = RawRequest {
        name: "my-app_1".to_string(),
        ..RawRequest::default()
    };

    assert!(resolve(&request).is_ok());
}

#[test]
fn names_with_other_characters_are_rejected() {
    for name in ["my app!", "", "café", "a/b", "demo."] {
        let request = RawRequest {
            name: name.to_string(),
            ..RawRequest::default()
        };

        assert_eq!(
            resolve(&request),
            Err(ValidationFailure::InvalidSiteName),
            "name {:?}",
            name
        );
    }
}

#[test]
fn name_failure_outranks_other_failures() {
    let request = RawRequest {
        name: "my app!".to_string(),
        php: Some("99".to_string()),
        with: Some("nosql".to_string()),
        ..RawRequest::default()
    };

    assert_eq!(resolve(&request), Err(ValidationFailure::InvalidSiteName));
}

// ============================================================================
// Validation: php and version
// ============================================================================

#[test]
fn unsupported_php_version_is_rejected() {
    let request = RawRequest {
        php: Some("99".to_string()),
        ..demo_request()
    };

    assert_eq!(resolve(&request), Err(ValidationFailure::InvalidPhpVersion));
}

#[test]
fn php_failure_outranks_version_failure() {
    let request = RawRequest {
        php: Some("99".to_string()),
        version: Some("7".to_string()),
        ..demo_request()
    };

    assert_eq!(resolve(&request), Err(ValidationFailure::InvalidPhpVersion));
}

#[test]
fn version_incompatible_with_php_is_rejected() {
    let request = RawRequest {
        php: Some("81".to_string()),
        version: Some("11".to_string()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::laravel_version("81"))
    );
}

#[test]
fn version_valid_for_one_php_is_not_valid_for_another() {
    // Laravel 8 runs on PHP 8.0 but was dropped by PHP 8.2.
    let ok = RawRequest {
        php: Some("80".to_string()),
        version: Some("8".to_string()),
        ..demo_request()
    };
    assert!(resolve(&ok).is_ok());

    let bad = RawRequest {
        php: Some("82".to_string()),
        version: Some("8".to_string()),
        ..demo_request()
    };
    assert_eq!(resolve(&bad), Err(ValidationFailure::laravel_version("82")));
}

// ============================================================================
// Validation: services
// ============================================================================

#[test]
fn service_list_is_deduplicated_in_first_occurrence_order() {
    let request = RawRequest {
        with: Some("mysql,mysql,redis".to_string()),
        ..demo_request()
    };

    let config = resolve(&request).unwrap();
    assert_eq!(config.services, vec!["mysql", "redis"]);
}

#[test]
fn none_alone_is_accepted() {
    let request = RawRequest {
        with: Some("none".to_string()),
        ..demo_request()
    };

    let config = resolve(&request).unwrap();
    assert_eq!(config.services, vec!["none"]);
}

#[test]
fn none_combined_with_real_services_is_rejected() {
    let request = RawRequest {
        with: Some("none,redis".to_string()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::service_selection())
    );
}

#[test]
fn unrecognized_service_is_rejected() {
    let request = RawRequest {
        with: Some("mysql,nosql".to_string()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::service_selection())
    );
}

#[test]
fn untrimmed_service_entries_are_rejected() {
    let request = RawRequest {
        with: Some("mysql, redis".to_string()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::service_selection())
    );
}

#[test]
fn empty_with_parameter_is_rejected() {
    // `?with=` splits into a single empty entry, which is not a service.
    let request = RawRequest {
        with: Some(String::new()),
        ..demo_request()
    };

    assert_eq!(
        resolve(&request),
        Err(ValidationFailure::service_selection())
    );
}

// ============================================================================
// Placeholder construction
// ============================================================================

#[test]
fn placeholders_carry_the_script_formats() {
    let request = RawRequest {
        php: Some("82".to_string()),
        version: Some("10".to_string()),
        with: Some("mysql,redis".to_string()),
        ..demo_request()
    };

    let values = resolve(&request).unwrap().placeholders();

    assert_eq!(values["php"], "82");
    assert_eq!(values["version"], "^100");
    assert_eq!(values["name"], "demo");
    assert_eq!(values["with"], "mysql,redis");
    assert_eq!(values["devcontainer"], "");
    assert_eq!(values["services"], "mysql redis");
    assert_eq!(values.len(), 6);
}

#[test]
fn devcontainer_flag_renders_the_cli_option() {
    let request = RawRequest {
        devcontainer: true,
        ..demo_request()
    };

    let values = resolve(&request).unwrap().placeholders();
    assert_eq!(values["devcontainer"], "--devcontainer");
}
