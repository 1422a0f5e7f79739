//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at process
//! start and injected; business logic never reads the environment.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret for bearer tokens. The same secret must be used for
    /// issuance and verification for the lifetime of the deployment.
    pub token_secret: String,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl: Duration::from_secs(24 * 3600),
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::Rng;
        use rand::distr::Alphanumeric;

        let secret: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
