use std::str::FromStr;

use serde_json::Value;
use tracing::warn;

use crate::{
    const_config::display::DISPLAY_PLACEHOLDER,
    uac::{DisplayName, Role, UserId},
};

/// What is kept in the session for a logged in user
#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct UserSessionInfo {
    pub user_id: UserId,
    pub display_name: DisplayName,
    /// `None` if the stored role is not one we know. Such a session is still
    /// logged in but is in no set of allowed roles
    pub role: Option<Role>,
}

impl UserSessionInfo {
    /// Reads session data that may have been written by anyone with access to
    /// the session store
    ///
    /// - Missing, empty or invalid `user_id` means nobody is logged in (`None`)
    /// - A missing or invalid `display_name` falls back to the user id
    /// - A role outside of [`Role`] is kept as `None`
    pub fn from_stored(value: &Value) -> Option<Self> {
        let raw_user_id = value.get("user_id").and_then(Value::as_str).unwrap_or_default();
        let user_id = match UserId::try_from(raw_user_id) {
            Ok(user_id) => user_id,
            Err(e) => {
                warn!(?e, "session has no usable user id, treating as logged out");
                return None;
            }
        };
        let display_name = value
            .get("display_name")
            .and_then(Value::as_str)
            .and_then(|x| DisplayName::try_from(x).ok())
            .unwrap_or_else(|| DisplayName::from(&user_id));
        let role = value.get("role").and_then(Value::as_str).and_then(|x| {
            Role::from_str(x)
                .inspect_err(|_| warn!(%user_id, role = x, "unknown role found in session"))
                .ok()
        });
        Some(Self {
            user_id,
            display_name,
            role,
        })
    }

    /// Role for display, the placeholder if the role is not known
    pub fn role_label(&self) -> &str {
        self.role.as_ref().map_or(DISPLAY_PLACEHOLDER, Role::as_ref)
    }
}
