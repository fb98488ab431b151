//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;

    /// All pages that go through the access gate are mounted under this scope
    /// (itself under the configured base path)
    pub const PATH_PAGES_SCOPE: &str = "/pages";
    pub const PATH_PAGE_DASHBOARD: PathSpec = PathSpec::get("/pages/dashboard");
    pub const PATH_PAGE_LOGIN: PathSpec = PathSpec::get("/pages/login");
    pub const PATH_PAGE_LOGIN_SUBMIT: PathSpec = PathSpec::post("/pages/login");
    pub const PATH_PAGE_LOGOUT: PathSpec = PathSpec::get("/pages/logout");
    pub const PATH_PAGE_PAYROLL: PathSpec = PathSpec::get("/pages/payroll");

    // Not mounted under the base path and not gated
    pub const PATH_HEALTH_CHECK: PathSpec = PathSpec::get("/health_check");
    pub const PATH_VERSION: PathSpec = PathSpec::get("/version");
}

pub mod display {
    /// Shown in place of a value that is missing or cannot be displayed
    pub const DISPLAY_PLACEHOLDER: &str = "—";
    pub const DISPLAY_CURRENCY_PREFIX: &str = "K";
    pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";
}

pub mod gate {
    /// Body of the terminal response sent to users that are logged in but lack
    /// the role required for a page
    pub const GATE_ACCESS_DENIED_MSG: &str = "Access denied.";
}

/// Figures shown on the payroll page. These are placeholders, payroll is not
/// computed by this application.
pub mod payroll {
    use crate::uac::Role;

    pub const PAYROLL_ALLOWED_ROLES: &[Role] = &[Role::Admin, Role::Manager];
    pub const PAYROLL_MONTH_TOTAL: f64 = 250_000.0;
    pub const PAYROLL_AVERAGE_PER_EMPLOYEE: f64 = 8_200.0;
    pub const PAYROLL_BONUSES: f64 = 35_000.0;
}
