//! Tests for errors module

use super::*;

use sail_build_core::{resolve, RawRequest};

/// An empty name is the cheapest way to produce a real validation failure.
fn validation_failure() -> ValidationFailure {
    resolve(&RawRequest::default()).unwrap_err()
}

#[test]
fn validation_failures_are_client_errors() {
    let error = ApiError::from(validation_failure());
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn render_failures_are_server_errors() {
    let error = ApiError::from(template_engine::Error::UnresolvedPlaceholder {
        name: "php".to_string(),
    });
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_response_body_is_the_exact_message() {
    let failure = validation_failure();
    let message = failure.to_string();

    let response = ApiError::from(failure).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(String::from_utf8(body.to_vec()).unwrap(), message);
}

#[tokio::test]
async fn render_response_body_hides_template_details() {
    let error = ApiError::from(template_engine::Error::UnresolvedPlaceholder {
        name: "mystery".to_string(),
    });

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(body.to_vec()).unwrap(),
        "An internal error occurred."
    );
}
