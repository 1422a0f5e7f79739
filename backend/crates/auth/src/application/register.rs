//! Register Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{password::Password, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username =
            UserName::new(input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password =
            Password::new(input.password).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::DuplicateUser);
        }

        let user = User::new(username, password);
        self.user_repo.create(&user).await?;

        // The token is issued only after the user record is durable, so a
        // failure in between leaves no half-authenticated state.
        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput { token })
    }
}
