//! Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens binding a
//! request to a user identity. Stateless: verification needs only the
//! signing secret, so there is no revocation - a token stays valid for
//! its full lifetime once issued.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims encoded in a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiry timestamp (seconds), issuance + 24h
    pub exp: i64,
}

/// Token issuance and verification service
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Build the service from configuration. Issuance and verification
    /// share the configured secret.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a signed token for the given user.
    pub fn issue(&self, user_id: &UserId) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {e}")))
    }

    /// Verify a token and resolve the user identity it was issued for.
    ///
    /// Any failure mode - bad signature, malformed payload, expiry -
    /// collapses into [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Extract the token from an `Authorization` header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig {
            token_secret: "unit-test-secret-key-of-sufficient-length".to_string(),
            token_ttl: Duration::from_secs(24 * 3600),
        })
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let service = service();
        let user_id = UserId::new();

        let token = service.issue(&user_id).expect("issue");
        let resolved = service.verify(&token).expect("verify");

        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: UserId::new().to_string(),
            iat: now - 100_000,
            exp: now - 3_600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret-key-of-sufficient-length"),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = service();
        let other = TokenService::new(&AuthConfig {
            token_secret: "a-completely-different-signing-secret".to_string(),
            token_ttl: Duration::from_secs(24 * 3600),
        });

        let token = other.issue(&UserId::new()).unwrap();
        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let service = service();
        assert!(matches!(
            service.verify("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(service.verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3_600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret-key-of-sufficient-length"),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(TokenService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(TokenService::extract_from_header("bearer abc"), None);
        assert_eq!(TokenService::extract_from_header("abc"), None);
    }
}
