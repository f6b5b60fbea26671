use game_storefront_api::{
    dto::auth::Claims,
    error::AppError,
    middleware::auth::{AuthUser, decode_token},
};
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &str = "test-secret";

fn token(sub: &str, exp_offset: i64, secret: &str) -> anyhow::Result<String> {
    let claims = Claims {
        sub: sub.to_string(),
        name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        exp: (chrono::Utc::now().timestamp() + exp_offset) as usize,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

#[test]
fn valid_token_yields_user() -> anyhow::Result<()> {
    let user = decode_token(&token("uid-1", 3600, SECRET)?, SECRET)?;
    assert_eq!(user.user_id, "uid-1");
    assert_eq!(user.display_name(), "Ada Lovelace");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    Ok(())
}

#[test]
fn wrong_secret_or_expired_token_is_unauthorized() -> anyhow::Result<()> {
    let err = decode_token(&token("uid-1", 3600, "other")?, SECRET).expect_err("bad signature");
    assert!(matches!(err, AppError::Unauthorized(_)));

    let err = decode_token(&token("uid-1", -3600, SECRET)?, SECRET).expect_err("expired");
    assert!(matches!(err, AppError::Unauthorized(_)));

    let err = decode_token(&token("", 3600, SECRET)?, SECRET).expect_err("no subject");
    assert!(matches!(err, AppError::Unauthorized(_)));
    Ok(())
}

#[test]
fn display_name_falls_back_to_email_then_placeholder() {
    let mut user = AuthUser::new("uid-2");
    assert_eq!(user.display_name(), "User");

    user.email = Some("grace@example.com".into());
    assert_eq!(user.display_name(), "grace");

    user.name = Some("  ".into());
    assert_eq!(user.display_name(), "grace");

    user.name = Some("Grace".into());
    assert_eq!(user.display_name(), "Grace");
}
