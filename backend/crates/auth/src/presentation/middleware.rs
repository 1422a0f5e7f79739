//! Auth Gate Middleware
//!
//! Guards protected routes: requires a valid bearer token and injects the
//! resolved identity into the request extensions. Pure identity
//! resolution - no business-logic decisions happen here.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<TokenService>,
}

impl AuthGateState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// The identity resolved by the gate, available to downstream handlers
/// via request extensions or directly as an extractor.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid `Authorization: Bearer <token>` header.
///
/// | Failure | Response |
/// |---------|----------|
/// | Header absent or not `Bearer ...` | 401 `MissingToken` |
/// | Signature/expiry/payload invalid | 401 `InvalidToken` |
pub async fn require_bearer_auth(
    State(state): State<AuthGateState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            TokenService::extract_from_header(header).ok_or(AuthError::MissingToken)?
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Request without bearer token");
            return Err(AuthError::MissingToken);
        }
    };

    let user_id = state.tokens.verify(token)?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });
    Ok(next.run(req).await)
}

/// Extractor for handlers behind the gate.
///
/// Reads the identity the middleware stored in request extensions; a
/// handler reached without the gate in front of it gets a 401.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
