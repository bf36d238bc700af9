//! Account storage abstraction.
//!
//! The registration flow only ever talks to [`AccountStore`], so the
//! in-memory implementation can be swapped for a real persistence backend
//! without touching handler or service logic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::core::error::AppError;
use crate::features::accounts::models::Account;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    EmailTaken,

    #[error("phone already registered")]
    PhoneTaken,
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmailTaken => AppError::DuplicateEmail,
            StoreError::PhoneTaken => AppError::DuplicatePhone,
        }
    }
}

/// Input for creating an account record
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<Account>;

    async fn find_by_phone(&self, phone: &str) -> Option<Account>;

    /// Insert a new account, enforcing email and phone uniqueness.
    ///
    /// The duplicate check and the insert must form one atomic unit: either
    /// both the account and its phone index entry are written, or neither
    /// is. Email uniqueness is checked before phone uniqueness.
    async fn insert_account(&self, account: NewAccount) -> Result<Account, StoreError>;
}

/// In-memory account store
///
/// Both maps live behind a single mutex; they form one consistency domain
/// and are only ever mutated together.
#[derive(Default)]
pub struct InMemoryAccountStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    /// email -> account record
    accounts: HashMap<String, Account>,
    /// phone -> owning email
    phone_index: HashMap<String, String>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Option<Account> {
        let inner = self.inner.lock().await;
        inner.accounts.get(email).cloned()
    }

    async fn find_by_phone(&self, phone: &str) -> Option<Account> {
        let inner = self.inner.lock().await;
        let email = inner.phone_index.get(phone)?;
        inner.accounts.get(email).cloned()
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut inner = self.inner.lock().await;

        if inner.accounts.contains_key(&account.email) {
            return Err(StoreError::EmailTaken);
        }
        if inner.phone_index.contains_key(&account.phone) {
            return Err(StoreError::PhoneTaken);
        }

        let record = Account {
            email: account.email.clone(),
            phone: account.phone.clone(),
            password_hash: account.password_hash,
            created_at: Utc::now(),
        };

        inner
            .phone_index
            .insert(account.phone, account.email.clone());
        inner.accounts.insert(account.email, record.clone());

        Ok(record)
    }
}
