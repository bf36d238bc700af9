use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::accounts::dtos::{AccountCreatedDto, RegisterAccountDto};
use crate::features::accounts::services::token_service::TokenIssuer;
use crate::features::accounts::store::{AccountStore, NewAccount};
use crate::shared::validation::is_valid_password;

/// Service for the account registration workflow
pub struct RegistrationService {
    store: Arc<dyn AccountStore>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new account.
    ///
    /// Validation short-circuits: password confirmation, password format,
    /// duplicate email, duplicate phone, in that order. The early duplicate
    /// lookups fail fast without paying for a hash; the store insert is the
    /// atomic re-check that holds under concurrent requests.
    pub async fn register(&self, dto: RegisterAccountDto) -> Result<AccountCreatedDto> {
        if dto.password != dto.password_confirmation {
            return Err(AppError::PasswordMismatch);
        }

        if !is_valid_password(&dto.password) {
            return Err(AppError::PasswordFormat);
        }

        if self.store.find_by_email(&dto.email).await.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        if self.store.find_by_phone(&dto.phone).await.is_some() {
            return Err(AppError::DuplicatePhone);
        }

        // bcrypt is deliberately slow; run it on the blocking pool and never
        // inside the store's critical section.
        let cost = self.bcrypt_cost;
        let password = dto.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))?;

        let account = self
            .store
            .insert_account(NewAccount {
                email: dto.email,
                phone: dto.phone,
                password_hash,
            })
            .await?;

        tracing::info!("Account registered: email={}", account.email);

        Ok(AccountCreatedDto {
            message: "user created successfully".to_string(),
            token: self.tokens.issue(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::store::InMemoryAccountStore;

    fn service_with_store() -> (RegistrationService, Arc<InMemoryAccountStore>) {
        let store = Arc::new(InMemoryAccountStore::new());
        let service = RegistrationService::new(
            Arc::clone(&store) as Arc<dyn AccountStore>,
            TokenIssuer::new(),
            4u32,
        );
        (service, store)
    }

    fn dto(email: &str, phone: &str, password: &str, confirmation: &str) -> RegisterAccountDto {
        RegisterAccountDto {
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_verifiable_hash() {
        let (service, store) = service_with_store();

        let created = service
            .register(dto("a@x.com", "123", "abc123", "abc123"))
            .await
            .unwrap();
        assert_eq!(created.message, "user created successfully");
        assert!(!created.token.is_empty());

        let account = store.find_by_email("a@x.com").await.unwrap();
        assert_ne!(account.password_hash, "abc123");
        assert!(bcrypt::verify("abc123", &account.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_password_mismatch_leaves_store_untouched() {
        let (service, store) = service_with_store();

        let err = service
            .register(dto("a@x.com", "123", "abc123", "abc124"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch));
        assert!(store.find_by_email("a@x.com").await.is_none());
        assert!(store.find_by_phone("123").await.is_none());
    }

    #[tokio::test]
    async fn test_password_format_checked_after_mismatch() {
        let (service, _store) = service_with_store();

        // Both rules are broken; the mismatch error wins.
        let err = service
            .register(dto("a@x.com", "123", "abcdef", "fedcba"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch));

        let err = service
            .register(dto("a@x.com", "123", "abcdef", "abcdef"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PasswordFormat));
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let (service, store) = service_with_store();
        service
            .register(dto("a@x.com", "123", "abc123", "abc123"))
            .await
            .unwrap();
        let original_hash = store.find_by_email("a@x.com").await.unwrap().password_hash;

        let err = service
            .register(dto("a@x.com", "456", "xyz789", "xyz789"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));

        // First record unchanged, and the losing phone was never claimed.
        assert_eq!(
            store.find_by_email("a@x.com").await.unwrap().password_hash,
            original_hash
        );
        assert!(store.find_by_phone("456").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_phone_under_different_email() {
        let (service, store) = service_with_store();
        service
            .register(dto("a@x.com", "123", "abc123", "abc123"))
            .await
            .unwrap();

        let err = service
            .register(dto("b@x.com", "123", "abc123", "abc123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicatePhone));
        assert!(store.find_by_email("b@x.com").await.is_none());
    }
}
