//! Decides if a request may reach a protected page
//!
//! The gate only reads the session, it never creates or destroys one. The
//! session for the current request is passed in explicitly and the outcome is
//! returned to the caller which must not render anything protected unless the
//! outcome is [`AccessOutcome::Continue`].

use crate::{
    build_redirect_path,
    const_config::{gate::GATE_ACCESS_DENIED_MSG, path::PATH_PAGE_LOGIN},
    session::UserSessionInfo,
    uac::{PageAccess, Role},
};

/// Result of a gate check. Both failure variants are terminal for the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    Continue,
    /// Not logged in, send the user to `location` to log in
    Redirect { location: String },
    /// Logged in but not allowed, respond with `message` and nothing else
    Fatal { message: &'static str },
}

impl AccessOutcome {
    /// Returns `true` if the access outcome is [`Continue`].
    ///
    /// [`Continue`]: AccessOutcome::Continue
    #[must_use]
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// True iff there is a session and it carries a non-empty user id
pub fn is_authenticated(session: Option<&UserSessionInfo>) -> bool {
    session.is_some_and(|x| !x.user_id.is_empty())
}

/// True iff there is a session and its role is one of `allowed_roles`
///
/// A missing session or one with an unknown role is never allowed
pub fn has_role(session: Option<&UserSessionInfo>, allowed_roles: &[Role]) -> bool {
    session
        .and_then(|x| x.role)
        .is_some_and(|role| role.is_one_of(allowed_roles))
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    base_path: String,
    login_location: String,
}

impl AccessGate {
    /// `base_path` is the prefix all pages are mounted under. Trailing slashes
    /// are ignored
    pub fn new(base_path: &str) -> Self {
        let base_path = base_path.trim_end_matches('/').to_string();
        let login_location = build_redirect_path(&base_path, PATH_PAGE_LOGIN.path);
        Self {
            base_path,
            login_location,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Where unauthenticated requests get sent
    pub fn login_location(&self) -> &str {
        &self.login_location
    }

    /// Full path of a page given its path relative to the base path
    pub fn page_location(&self, relative_path: &str) -> String {
        build_redirect_path(&self.base_path, relative_path)
    }

    /// Strips the base path off a request path. Request paths outside the base
    /// path are returned unchanged
    pub fn page_path<'a>(&self, request_path: &'a str) -> &'a str {
        request_path
            .strip_prefix(self.base_path.as_str())
            .filter(|x| x.starts_with('/'))
            .unwrap_or(request_path)
    }

    pub fn require_authenticated(&self, session: Option<&UserSessionInfo>) -> AccessOutcome {
        if is_authenticated(session) {
            AccessOutcome::Continue
        } else {
            AccessOutcome::Redirect {
                location: self.login_location.clone(),
            }
        }
    }

    /// Requires a login first (redirecting if missing) then one of
    /// `allowed_roles` (denying if missing)
    pub fn require_role(
        &self,
        session: Option<&UserSessionInfo>,
        allowed_roles: &[Role],
    ) -> AccessOutcome {
        let outcome = self.require_authenticated(session);
        if !outcome.is_continue() {
            return outcome;
        }
        if has_role(session, allowed_roles) {
            AccessOutcome::Continue
        } else {
            AccessOutcome::Fatal {
                message: GATE_ACCESS_DENIED_MSG,
            }
        }
    }

    #[tracing::instrument(ret, skip(self))]
    pub fn check(&self, access: PageAccess, session: Option<&UserSessionInfo>) -> AccessOutcome {
        match access {
            PageAccess::Open => AccessOutcome::Continue,
            PageAccess::Authenticated => self.require_authenticated(session),
            PageAccess::Roles(allowed_roles) => self.require_role(session, allowed_roles),
        }
    }
}
