use uuid::Uuid;

/// Issues opaque session tokens for newly registered accounts.
///
/// Tokens are drawn from the OS random source via UUID v4, so they are
/// unpredictable and carry no account information. They are not persisted;
/// a token is only an acknowledgment credential handed to the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    pub fn issue(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
