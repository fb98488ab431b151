mod middleware;
mod password;

pub use middleware::validate_page_access;
pub use password::{argon2_settings, validate_credentials, Credentials, UserDirectory};
