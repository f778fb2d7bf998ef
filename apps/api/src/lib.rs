//! Garden API helpers
//!
//! Building blocks shared by the Garden API controllers:
//! - Request value filtering and field formatting
//! - Expand parameter resolution and its schema fragment
//! - A per-controller cached user fragment schema
//! - Field-gated permission checks
//! - A catch-all OPTIONS handler

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;

pub use api::ApiController;
pub use auth::{Permission, PermissionChecker, SessionPermissions};
pub use crate::config::{ApiSettings, Config};
pub use error::{Error, Result};
