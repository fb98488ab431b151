use actix_web::http::Method;

use super::PATH_PAGES_SCOPE;

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    /// The path relative to [`PATH_PAGES_SCOPE`], used when registering the
    /// route inside that scope. Paths outside the scope are returned unchanged
    pub fn scoped_path(&self) -> &'static str {
        self.path.strip_prefix(PATH_PAGES_SCOPE).unwrap_or(self.path)
    }
}
