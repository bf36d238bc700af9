//! Account routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::accounts::handlers;
use crate::features::accounts::services::RegistrationService;

/// Create routes for the accounts feature
///
/// Note: registration is public (no authentication required).
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/cadastro", post(handlers::register_account))
        .with_state(service)
}
