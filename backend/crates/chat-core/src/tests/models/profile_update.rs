use crate::{CoreError, MAX_NAME_LENGTH, ProfileUpdate};

#[test]
fn given_default_update_then_is_empty() {
    assert!(ProfileUpdate::default().is_empty());
}

#[test]
fn given_reasonable_fields_when_validated_then_ok() {
    let update = ProfileUpdate {
        first_name: Some("Ann".to_string()),
        last_name: Some("Lee".to_string()),
        avatar_url: Some("https://example.com/a.png".to_string()),
    };

    assert!(update.validate().is_ok());
}

#[test]
fn given_overlong_first_name_when_validated_then_field_is_reported() {
    let update = ProfileUpdate {
        first_name: Some("x".repeat(MAX_NAME_LENGTH + 1)),
        ..Default::default()
    };

    match update.validate() {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("first_name"))
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_non_http_avatar_when_validated_then_error() {
    let update = ProfileUpdate {
        avatar_url: Some("ftp://example.com/a.png".to_string()),
        ..Default::default()
    };

    assert!(update.validate().is_err());
}
