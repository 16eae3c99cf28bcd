//! JWT access-token validation.
//!
//! Tokens are minted by the identity provider and signed with a shared
//! HS256 secret. This service only verifies them: signature, expiry and
//! audience. The `sub` claim carries the user's UUID.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use mumentum_core::types::UserId;
use serde::{Deserialize, Serialize};

/// Claims the API relies on. Other claims in the token are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's id at the identity provider.
    pub sub: UserId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Intended audience.
    pub aud: String,
}

/// Default audience of user tokens.
pub const DEFAULT_AUDIENCE: &str = "authenticated";

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Expected `aud` claim.
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var              | Required | Default         |
    /// |----------------------|----------|-----------------|
    /// | `AUTH_JWT_SECRET`    | **yes**  | --              |
    /// | `AUTH_JWT_AUDIENCE`  | no       | `authenticated` |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET")
            .expect("AUTH_JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_JWT_SECRET must not be empty");

        let audience =
            std::env::var("AUTH_JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.into());

        Self { secret, audience }
    }
}

/// Validate and decode a bearer token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[config.audience.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    fn claims(exp_offset_secs: i64, aud: &str) -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            exp: chrono::Utc::now().timestamp() + exp_offset_secs,
            aud: aud.to_string(),
        }
    }

    #[test]
    fn test_valid_token_decodes() {
        let config = test_config();
        let original = claims(900, DEFAULT_AUDIENCE);
        let token = sign(&original, &config.secret);

        let decoded = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(decoded.sub, original.sub);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        // Well beyond the default 60-second leeway.
        let token = sign(&claims(-300, DEFAULT_AUDIENCE), &config.secret);
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_wrong_audience_fails() {
        let config = test_config();
        let token = sign(&claims(900, "service_role"), &config.secret);
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config = test_config();
        let token = sign(&claims(900, DEFAULT_AUDIENCE), "another-secret");
        assert!(validate_token(&token, &config).is_err());
    }
}
