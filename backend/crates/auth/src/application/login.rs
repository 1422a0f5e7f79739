//! Login Use Case
//!
//! Authenticates a user and issues a fresh token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An unparseable username cannot match any stored user; fold it
        // into the same failure as a wrong password.
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Plain equality; unknown-user and wrong-password failures are
        // indistinguishable to the caller.
        if !user.password.matches(&input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput { token })
    }
}
