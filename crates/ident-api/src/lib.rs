//! # Ident API
//!
//! HTTP surface for the account service: handlers, router, response
//! envelope, and error translation.

pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
