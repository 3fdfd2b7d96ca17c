//! Access-token handling for the dashboard.
//!
//! A successful `POST /api/login` issues a short-lived HS256 token whose
//! claims carry the user's id, name and role. Mutating endpoints extract
//! and verify it from the `Authorization: Bearer` header; the role check
//! happens there, at the presentation boundary.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DashboardError;
use crate::AppState;
use stockroom_core::{Role, User};

/// Token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i64,

    /// User name, used as the acting user on recorded movements
    pub name: String,

    /// Role name ("administrator" or "staff")
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Token id
    pub jti: String,
}

impl Claims {
    /// Whether the token belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        Role::from_name(&self.role).is_some_and(|role| role.is_admin())
    }
}

/// Issues and verifies access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    lifetime_secs: i64,
}

impl TokenIssuer {
    /// Creates a new token issuer.
    pub fn new(secret: String, lifetime_secs: i64) -> Self {
        TokenIssuer {
            secret,
            lifetime_secs,
        }
    }

    /// Generates an access token for an authenticated user.
    pub fn issue(&self, user: &User) -> Result<String, DashboardError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.lifetime_secs);

        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| DashboardError::internal(format!("failed to issue token: {e}")))
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, DashboardError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| DashboardError::unauthorized("invalid or expired token"))
    }
}

/// Extractor for endpoints any logged-in user may call.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(AuthUser(claims): AuthUser, ...) -> ... { }
/// ```
pub struct AuthUser(pub Claims);

/// Extractor for administrator-only endpoints.
pub struct AdminUser(pub Claims);

fn bearer_claims(parts: &Parts, state: &AppState) -> Result<Claims, DashboardError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| DashboardError::unauthorized("missing authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| DashboardError::unauthorized("use: Bearer <token>"))?;

    state.tokens.verify(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = DashboardError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthUser(bearer_claims(parts, state)?))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = DashboardError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts, state)?;
        if !claims.is_admin() {
            return Err(DashboardError::forbidden(
                "this action requires an administrator",
            ));
        }
        Ok(AdminUser(claims))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 7,
            name: "ana".to_string(),
            role,
        }
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let issuer = TokenIssuer::new("test-secret".to_string(), 3600);
        let token = issuer.issue(&user(Role::Administrator)).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.name, "ana");
        assert!(claims.is_admin());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenIssuer::new("test-secret".to_string(), 3600);
        let token = issuer.issue(&user(Role::Staff)).unwrap();

        let other = TokenIssuer::new("other-secret".to_string(), 3600);
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_staff_claims_are_not_admin() {
        let issuer = TokenIssuer::new("test-secret".to_string(), 3600);
        let token = issuer.issue(&user(Role::Staff)).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert!(!claims.is_admin());
    }
}
