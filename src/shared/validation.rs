use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for validating phone fields
    /// Digits with an optional leading "+", 3-20 characters
    /// - Valid: "123", "+5511999998888", "011987654321"
    /// - Invalid: "12", "phone", "+55 11 99999", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{3,20}$").unwrap();

    /// Regex for the password alphabet and length: alphanumeric only, minimum 6.
    /// The letter/digit requirements are checked separately in
    /// [`is_valid_password`] since the regex engine has no lookahead.
    pub static ref PASSWORD_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{6,}$").unwrap();
}

/// Check the password format rule: only letters and digits, at least 6
/// characters, with at least one letter and at least one digit.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_REGEX.is_match(password)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Surface the first message from a set of declarative validation errors.
///
/// Validation produces a normalized error list per field; clients only get
/// the first message, mirroring how the API reports structural errors.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "invalid request".to_string())
}
