//! # Ident Shared
//!
//! Shared constants, types, configuration, and telemetry for the ident
//! credential-management service.

pub mod config;
pub mod constants;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use types::*;
