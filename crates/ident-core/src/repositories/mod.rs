//! Repository traits (ports) and the in-memory test double

pub mod account_repository;
pub mod memory;

pub use account_repository::AccountRepository;
pub use memory::InMemoryAccountRepository;
