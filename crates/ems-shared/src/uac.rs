//! Shared items related to user account control

mod access;
mod errors;
mod role;
mod user;

pub use access::{default_page_access, get_required_access, PageAccess, PageAccessMap};
pub use errors::{AuthError, GateError};
pub use role::Role;
pub use user::{DisplayName, UserId};
