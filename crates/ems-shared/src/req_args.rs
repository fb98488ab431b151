//! This module stores the expected format of the arguments for the requests

use secrecy::SecretString;

/// Fields of the login form
#[derive(serde::Deserialize, Clone)]
pub struct LoginReqArgs {
    pub user_id: String,
    pub password: SecretString,
}

impl std::fmt::Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
