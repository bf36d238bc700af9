use chrono::{DateTime, Utc};

/// Stored account record
///
/// The plaintext password is never stored; only the salted bcrypt hash.
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
