//! Account registration feature.
//!
//! Validates a registration request, enforces email and phone uniqueness
//! against the injected account store, hashes the password with bcrypt and
//! issues an opaque session token.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/cadastro` | No | Register new user account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::{RegistrationService, TokenIssuer};
pub use store::{AccountStore, InMemoryAccountStore};
