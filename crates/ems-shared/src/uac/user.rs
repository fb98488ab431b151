use std::ops::Deref;

use crate::errors::ConversionError;

/// Identifies a user and is constrained to not be an empty string. Its
/// presence in a session is what marks the session as logged in
#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl UserId {
    pub const MAX_LENGTH: usize = 32;
}

impl DisplayName {
    pub const MAX_LENGTH: usize = 50;
}

fn check_length(value: &str, max: usize) -> Result<(), ConversionError> {
    if value.is_empty() {
        return Err(ConversionError::Empty);
    }
    if value.len() > max {
        return Err(ConversionError::MaxExceeded {
            max,
            actual: value.len(),
        });
    }
    Ok(())
}

impl TryFrom<String> for UserId {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_length(&value, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for UserId {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_length(&value, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<&UserId> for DisplayName {
    /// Always valid as a user id is never empty or longer than a display name
    fn from(value: &UserId) -> Self {
        Self(value.0.clone())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl Deref for UserId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0[..]
    }
}

impl Deref for DisplayName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0[..]
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
