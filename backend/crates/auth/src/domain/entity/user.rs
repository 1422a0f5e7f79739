//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{password::Password, user_name::UserName};

/// User entity
///
/// Created once at registration and immutable afterwards - there is no
/// profile editing and no user deletion in this service.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Username (unique, for login)
    pub username: UserName,
    /// Stored credential (plain text, see the value object docs)
    pub password: Password,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, password: Password) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            password,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_fresh_id() {
        let a = User::new(
            UserName::new("alice").unwrap(),
            Password::new("pw1").unwrap(),
        );
        let b = User::new(
            UserName::new("alice").unwrap(),
            Password::new("pw1").unwrap(),
        );
        assert_ne!(a.user_id, b.user_id);
    }
}
