///! Tests for JWT claim helpers: name splitting, email fallback, and the
///! user-ID extraction the WebSocket and REST layers both rely on.
///!
///! No running server or network is needed; claims are constructed directly.
///!
///! Run with: `cargo test --test auth_claims_test`
use chrono::Utc;
use uuid::Uuid;

use labourmandi_backend::auth::jwt::{Claims, UserMetadata};

fn bare_claims(sub: String) -> Claims {
    let now = Utc::now().timestamp() as usize;
    Claims {
        sub,
        exp: now + 3600,
        iat: Some(now),
        iss: Some("https://example.supabase.co/auth/v1".to_string()),
        email: Some("alice@example.com".to_string()),
        role: Some("authenticated".to_string()),
        user_metadata: None,
    }
}

fn metadata() -> UserMetadata {
    UserMetadata {
        full_name: None,
        given_name: None,
        family_name: None,
        avatar_url: None,
        picture: None,
        email: None,
        email_verified: None,
    }
}

#[test]
fn test_user_id_parses_sub_uuid() {
    let id = Uuid::new_v4();
    let claims = bare_claims(id.to_string());
    assert_eq!(claims.user_id().unwrap(), id);
}

#[test]
fn test_user_id_rejects_non_uuid_sub() {
    let claims = bare_claims("not-a-uuid".to_string());
    assert!(claims.user_id().is_err());
}

#[test]
fn test_names_prefer_explicit_given_and_family() {
    let mut claims = bare_claims(Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: Some("Wrong Person".to_string()),
        given_name: Some("Asha".to_string()),
        family_name: Some("Verma".to_string()),
        ..metadata()
    });

    assert_eq!(claims.first_name().unwrap(), "Asha");
    assert_eq!(claims.last_name().unwrap(), "Verma");
}

#[test]
fn test_names_fall_back_to_splitting_full_name() {
    let mut claims = bare_claims(Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: Some("Ravi Kumar Sharma".to_string()),
        ..metadata()
    });

    assert_eq!(claims.first_name().unwrap(), "Ravi");
    assert_eq!(claims.last_name().unwrap(), "Kumar Sharma");
}

#[test]
fn test_single_word_full_name_has_no_last_name() {
    let mut claims = bare_claims(Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: Some("Madonna".to_string()),
        ..metadata()
    });

    assert_eq!(claims.first_name().unwrap(), "Madonna");
    assert!(claims.last_name().is_none());
}

#[test]
fn test_profile_image_prefers_avatar_url_over_picture() {
    let mut claims = bare_claims(Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        avatar_url: Some("https://example.com/avatar.png".to_string()),
        picture: Some("https://example.com/picture.png".to_string()),
        ..metadata()
    });

    assert_eq!(
        claims.profile_image_url().unwrap(),
        "https://example.com/avatar.png"
    );
}

#[test]
fn test_email_falls_back_to_metadata() {
    let mut claims = bare_claims(Uuid::new_v4().to_string());
    claims.email = None;
    claims.user_metadata = Some(UserMetadata {
        email: Some("meta@example.com".to_string()),
        ..metadata()
    });

    assert_eq!(claims.user_email().unwrap(), "meta@example.com");
}

#[test]
fn test_helpers_with_no_metadata_at_all() {
    let claims = bare_claims(Uuid::new_v4().to_string());

    assert_eq!(claims.user_email().unwrap(), "alice@example.com");
    assert!(claims.first_name().is_none());
    assert!(claims.last_name().is_none());
    assert!(claims.profile_image_url().is_none());
}
