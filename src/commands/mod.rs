//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — catalog maintainer commands (validate/fingerprint).
//! - `runtime.rs` — list/search/show/brand/brands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate projection and rendering to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::handle_admin_commands;
pub use runtime::handle_runtime_commands;
