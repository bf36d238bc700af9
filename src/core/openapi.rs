use utoipa::{Modify, OpenApi};

use crate::core::error::DuplicateErrorBody;
use crate::features::accounts::{dtos as accounts_dtos, handlers as accounts_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Accounts
        accounts_handlers::account_handler::register_account,
    ),
    components(
        schemas(
            // Accounts
            accounts_dtos::RegisterAccountDto,
            accounts_dtos::AccountCreatedDto,
            DuplicateErrorBody,
        )
    ),
    tags(
        (name = "accounts", description = "Account registration (public)"),
    ),
    info(
        title = "Mobility API",
        version = "0.1.0",
        description = "API documentation for the mobility backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
