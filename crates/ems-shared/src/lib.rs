//! Code shared between the server and its tests
//!
//! The access gate and the display helpers are pure so that they can be
//! exercised without an HTTP server.

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
pub mod formatting;
pub mod gate;
pub mod req_args;
pub mod session;
pub mod telemetry;
pub mod uac;

pub use formatting::{build_redirect_path, escape_html, format_currency, format_date};
pub use gate::{AccessGate, AccessOutcome};
