use std::{collections::HashMap, sync::OnceLock};

use crate::const_config::{path::*, payroll::PAYROLL_ALLOWED_ROLES};

use super::Role;

/// What a page requires of the session before it may be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// No session needed
    Open,
    /// Any logged in user
    Authenticated,
    /// Logged in and assigned one of these roles
    Roles(&'static [Role]),
}

pub type PageAccessMap = HashMap<&'static str, PageAccess>;

static PAGE_ACCESS_MAP: OnceLock<PageAccessMap> = OnceLock::new();

pub fn default_page_access() -> PageAccessMap {
    let mut result = HashMap::new();
    // Login GET and POST share a path
    result.insert(PATH_PAGE_LOGIN.path, PageAccess::Open);
    result.insert(PATH_PAGE_LOGOUT.path, PageAccess::Authenticated);
    result.insert(PATH_PAGE_DASHBOARD.path, PageAccess::Authenticated);
    result.insert(
        PATH_PAGE_PAYROLL.path,
        PageAccess::Roles(PAYROLL_ALLOWED_ROLES),
    );
    result
}

/// Takes a page path (relative to the base path) and returns the access
/// required for it if found
///
/// **Note:** Every page inside the gated scope must have an entry, even if it
/// is [`PageAccess::Open`]. Paths without an entry are refused.
#[tracing::instrument(ret)]
pub fn get_required_access(path: &str) -> Option<PageAccess> {
    PAGE_ACCESS_MAP
        .get_or_init(default_page_access)
        .get(path)
        .copied()
}
