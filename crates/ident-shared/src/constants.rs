//! Application-wide constants

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 30;
pub const DEFAULT_HASH_COST: u32 = 10;
