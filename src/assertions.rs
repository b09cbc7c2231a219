//! Contract checks on captured API responses.
//!
//! Each check returns the first divergence as an [`AssertionFailure`]
//! carrying the expected and actual values.
use crate::domain::{ApiResponse, TouristId};
use serde::Deserialize;
use serde_json::Value;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{subject}: expected {expected}, actual {actual}")]
pub struct AssertionFailure {
    pub subject: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionFailure {
    pub fn new(
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub fn assert_status(response: &ApiResponse, expected: u16) -> Result<(), AssertionFailure> {
    if response.status() == expected {
        Ok(())
    } else {
        Err(AssertionFailure::new(
            "status code",
            expected.to_string(),
            response.status().to_string(),
        ))
    }
}

/// Compare the value found at a JSON pointer (e.g. `/ModelState/log.email`).
///
/// A missing field never matches, not even an expected `null`.
pub fn assert_json_field(body: &Value, pointer: &str, expected: &Value) -> Result<(), AssertionFailure> {
    match body.pointer(pointer) {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(AssertionFailure::new(
            pointer,
            expected.to_string(),
            actual.to_string(),
        )),
        None => Err(AssertionFailure::new(pointer, expected.to_string(), "<missing>")),
    }
}

/// Compare an id field, a JSON number standing for its decimal string.
pub fn assert_json_id(body: &Value, pointer: &str, expected: &TouristId) -> Result<(), AssertionFailure> {
    let actual = body.pointer(pointer);
    match actual.map(TouristId::deserialize) {
        Some(Ok(id)) if &id == expected => Ok(()),
        _ => Err(AssertionFailure::new(
            pointer,
            Value::String(expected.to_string()).to_string(),
            actual.map_or_else(|| "<missing>".to_string(), Value::to_string),
        )),
    }
}

pub fn assert_equal<T>(subject: &str, expected: &T, actual: &T) -> Result<(), AssertionFailure>
where
    T: PartialEq + std::fmt::Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::new(
            subject,
            format!("{:?}", expected),
            format!("{:?}", actual),
        ))
    }
}
