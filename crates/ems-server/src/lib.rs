//! Server rendered employee management pages
//!
//! # Notable design decisions (notes)
//! - Every page is mounted under `application.base_path` inside the
//!   [`PATH_PAGES_SCOPE`](ems_shared::const_config::path::PATH_PAGES_SCOPE)
//!   scope which is wrapped by
//!   [`validate_page_access`](authentication::validate_page_access). The gate
//!   runs before any page handler and either lets the request through or ends
//!   it with a redirect to the login page or an "Access denied." response.
//! - Access required per page is looked up in
//!   [`ems_shared::uac::get_required_access`]. Pages missing from that table
//!   are refused.
//! - Handlers get the logged in user from the request extensions
//!   (`web::ReqData<UserSessionInfo>`), they never look at the session store
//!   to decide on access themselves.
//! - Suggested sequence of steps to add a page:
//!     - Add the path constant in `ems-shared/src/const_config.rs`
//!     - Add the access entry in `ems-shared/src/uac/access.rs`
//!     - Create the handler in `routes` and register it in `startup.rs`
//!     - Add tests in `tests/api`

#![warn(unused_crate_dependencies)]

pub mod authentication;
mod configuration;
mod error_wrappers;
pub mod routes;
pub mod session_state;
pub mod startup;
mod templates;

pub use configuration::{get_configuration, ApplicationSettings, Configuration, UserAccount};
pub use error_wrappers::e500;
pub use startup::{get_socket_address, initialize_tracing, ApiServerBuilder, RunnableApiServer};

mod warning_suppress {
    use tokio as _; // Runtime for the binary
}
