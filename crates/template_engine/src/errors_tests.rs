//! Tests for errors module

use super::*;

#[test]
fn unresolved_placeholder_names_the_token() {
    let error = Error::UnresolvedPlaceholder {
        name: "services".to_string(),
    };

    assert_eq!(error.to_string(), "Template placeholder has no value: services");
}
