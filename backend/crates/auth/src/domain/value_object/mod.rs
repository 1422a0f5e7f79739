pub mod password;
pub mod user_name;

pub use password::Password;
pub use user_name::UserName;
