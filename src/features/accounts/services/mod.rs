pub mod registration_service;
pub mod token_service;

pub use registration_service::RegistrationService;
pub use token_service::TokenIssuer;
