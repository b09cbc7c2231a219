//! Literal values the remote API is expected to answer with

/// Account the API accepts
pub const VALID_EMAIL: &str = "test@test.com";
pub const VALID_PASSWORD: &str = "testpass";

/// Account the API rejects at application level
pub const INVALID_EMAIL: &str = "invalid_email";
pub const INVALID_PASSWORD: &str = "invalid_password";

/// Application-level code for a rejected login (sent with status 200)
pub const LOGIN_REJECTED_CODE: i64 = 1;
pub const LOGIN_REJECTED_MESSAGE: &str = "invalid username or password";

/// `Message` of every 400 response
pub const INVALID_REQUEST_MESSAGE: &str = "The request is invalid.";

/// Validation message listed under a `ModelState` key
pub const FIELD_REQUIRED_MESSAGE: &str = "field is required";
pub const MODEL_STATE_EMAIL_KEY: &str = "log.email";
pub const MODEL_STATE_PASSWORD_KEY: &str = "log.password";

/// Id no tourist will ever have; the API answers 400, not 404
pub const NONEXISTENT_TOURIST_ID: &str = "nonexistent_id";

pub fn get_tourist_step(tourist_id: &str) -> String {
    format!("Get tourist with ID: {}", tourist_id)
}
