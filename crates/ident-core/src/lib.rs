//! # Ident Core
//!
//! Domain entities, services, and repository ports for the ident
//! credential-management service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
