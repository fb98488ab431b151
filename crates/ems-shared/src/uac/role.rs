use serde::{Deserialize, Serialize};

/// The closed set of roles a user can be assigned. Pages declare which of
/// these they allow
#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// Returns true if this role is one of `allowed`
    pub fn is_one_of(&self, allowed: &[Role]) -> bool {
        allowed.contains(self)
    }
}
