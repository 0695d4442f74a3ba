use crate::ApiError;

use chat_auth::AuthError;
use chat_core::CoreError;
use chat_identity::{AuthorityError, IdentityError};

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_unauthorized_when_rendered_then_401_with_code() {
    let (status, json) = body_json(ApiError::Unauthorized {
        message: "Missing Authorization header".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Missing Authorization header");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "avatar_url must be an http(s) URL".into(),
        field: Some("avatar_url".into()),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "avatar_url");
}

#[tokio::test]
async fn given_profile_update_failure_when_rendered_then_500_with_dedicated_code() {
    let (status, json) = body_json(ApiError::ProfileUpdateFailed {
        message: "Could not save profile for user 7".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "PROFILE_UPDATE_FAILED");
}

#[tokio::test]
async fn given_service_unavailable_when_rendered_then_503() {
    let (status, json) = body_json(ApiError::ServiceUnavailable {
        message: "down".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[test]
fn given_auth_error_when_converted_then_unauthorized_names_reason() {
    let api_error: ApiError = AuthError::Expired {
        expired_at: 10,
        location: here(),
    }
    .into();

    match api_error {
        ApiError::Unauthorized { message, .. } => assert!(message.contains("TOKEN_EXPIRED")),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn given_authority_not_found_when_converted_then_not_found() {
    let api_error: ApiError = IdentityError::IdentityUnavailable {
        subject_id: 7,
        source: AuthorityError::not_found(7),
        location: here(),
    }
    .into();

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

#[test]
fn given_authority_transport_failure_when_converted_then_service_unavailable() {
    let api_error: ApiError = IdentityError::IdentityUnavailable {
        subject_id: 7,
        source: AuthorityError::transport("connection refused"),
        location: here(),
    }
    .into();

    assert!(matches!(api_error, ApiError::ServiceUnavailable { .. }));
}

#[test]
fn given_store_write_failure_when_converted_then_profile_update_failed() {
    let api_error: ApiError = IdentityError::ProfileUpdateFailed {
        subject_id: 7,
        message: "disk full".into(),
        location: here(),
    }
    .into();

    match api_error {
        ApiError::ProfileUpdateFailed { message, .. } => {
            assert!(!message.contains("disk full"));
        }
        other => panic!("expected ProfileUpdateFailed, got {other:?}"),
    }
}

#[test]
fn given_invalid_profile_when_converted_then_validation_keeps_field() {
    let api_error: ApiError = IdentityError::InvalidProfile {
        source: CoreError::Validation {
            message: "first_name too long".into(),
            field: Some("first_name".into()),
            location: here(),
        },
        location: here(),
    }
    .into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("first_name")),
        other => panic!("expected Validation, got {other:?}"),
    }
}
