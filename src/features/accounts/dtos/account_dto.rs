use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for account registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountDto {
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[validate(regex(
        path = *crate::shared::validation::PHONE_REGEX,
        message = "invalid phone number"
    ))]
    pub phone: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "password confirmation is required"))]
    pub password_confirmation: String,
}

/// Response DTO for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountCreatedDto {
    pub message: String,
    /// Opaque session token issued for the new account
    pub token: String,
}
