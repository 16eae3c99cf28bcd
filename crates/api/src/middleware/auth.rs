//! Caller identity for user-scoped handlers.
//!
//! The identity provider issues the token; this service only verifies it
//! and keeps the subject. Onboarding answers, profiles, health entries and
//! dashboard rows are all keyed by that subject, so handlers never accept a
//! user id from the body or path.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use mumentum_core::error::CoreError;
use mumentum_core::types::UserId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Why a request did not identify a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    NotBearer,
    InvalidToken,
}

impl AuthRejection {
    fn message(self) -> &'static str {
        match self {
            Self::MissingHeader => "Sign in to continue: missing Authorization header",
            Self::NotBearer => "Authorization header must use the Bearer scheme",
            Self::InvalidToken => "Session is invalid or has expired, sign in again",
        }
    }
}

impl From<AuthRejection> for AppError {
    fn from(rejection: AuthRejection) -> Self {
        AppError::Core(CoreError::Unauthorized(rejection.message().to_string()))
    }
}

/// The token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively and surrounding whitespace is
/// ignored, as browsers and HTTP clients differ here.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthRejection::MissingHeader)?
        .trim();

    // The value is trimmed, so anything after the first space is non-empty.
    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(token.trim()),
        _ => Err(AuthRejection::NotBearer),
    }
}

/// The verified caller. Extracting it also records `user_id` on the
/// current request span.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).inspect_err(|reason| {
            tracing::debug!(?reason, path = %parts.uri.path(), "Request without usable bearer token");
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AuthRejection::InvalidToken
        })?;

        tracing::Span::current().record("user_id", tracing::field::display(claims.sub));

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Ok("abc.def"));
        assert_eq!(bearer_token(&headers("bearer abc.def")), Ok("abc.def"));
        assert_eq!(bearer_token(&headers("  BEARER   abc.def ")), Ok("abc.def"));
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(bearer_token(&HeaderMap::new()), Err(AuthRejection::MissingHeader));
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwdw==")), Err(AuthRejection::NotBearer));
        assert_eq!(bearer_token(&headers("abc.def")), Err(AuthRejection::NotBearer));
        assert_eq!(bearer_token(&headers("Bearer ")), Err(AuthRejection::NotBearer));
        assert_eq!(bearer_token(&headers("Bearer  \t")), Err(AuthRejection::NotBearer));
    }

    #[test]
    fn rejections_map_to_unauthorized() {
        let err = AppError::from(AuthRejection::InvalidToken);
        assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
    }
}
