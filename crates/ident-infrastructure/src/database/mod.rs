//! Database connection and repositories

pub mod connection;
pub mod postgres;

pub use postgres::PgAccountRepository;
