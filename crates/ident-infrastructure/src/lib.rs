//! # Ident Infrastructure
//!
//! Storage-layer implementations of the core repository ports.

pub mod database;
