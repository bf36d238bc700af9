//! Account registration handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::{AccountCreatedDto, RegisterAccountDto};
use crate::features::accounts::services::RegistrationService;
use crate::shared::validation::first_validation_message;

/// Register a new user account
///
/// Public endpoint. Structural validation runs before the business rules;
/// its first error message is returned as a plain 400. Duplicate email or
/// phone failures carry a structured `{errorCode, message}` body instead.
#[utoipa::path(
    post,
    path = "/cadastro",
    request_body = RegisterAccountDto,
    responses(
        (status = 201, description = "Account created successfully", body = AccountCreatedDto),
        (status = 400, description = "Validation failure (plain message) or duplicate email/phone (structured body)", body = crate::core::error::DuplicateErrorBody)
    ),
    tag = "accounts"
)]
pub async fn register_account(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<RegisterAccountDto>,
) -> Result<(StatusCode, Json<AccountCreatedDto>)> {
    if let Err(errors) = dto.validate() {
        return Err(AppError::Validation(first_validation_message(&errors)));
    }

    let created = service.register(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
