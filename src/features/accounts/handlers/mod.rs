pub mod account_handler;

pub use account_handler::register_account;
