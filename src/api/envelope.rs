//! Uniform response envelope for transport layers.

use serde::Serialize;
use serde_json::Value;

/// Code used by successful envelopes.
const SUCCESS_CODE: u16 = 200;

/// Code used by failure envelopes.
const FAILURE_CODE: u16 = 400;

/// Uniform wrapper around operation outcomes.
///
/// Every operation result crossing the service boundary is wrapped in this
/// shape so callers branch on `is_error` rather than on transport status
/// codes. Absent fields are omitted from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Outcome code, `200` for success and `400` for failure.
    pub code: u16,
    /// Whether the envelope carries a failure.
    pub is_error: bool,
    /// Failure messages, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_messages: Option<Vec<String>>,
    /// Human-readable summary, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Operation payload, when the outcome carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ResponseEnvelope {
    /// Wraps a successful outcome with a payload.
    #[must_use]
    pub fn success(message: impl Into<String>, result: Value) -> Self {
        Self {
            code: SUCCESS_CODE,
            is_error: false,
            error_messages: None,
            message: Some(message.into()),
            result: Some(result),
        }
    }

    /// Wraps a successful outcome without a payload.
    #[must_use]
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE,
            is_error: false,
            error_messages: None,
            message: Some(message.into()),
            result: None,
        }
    }

    /// Wraps a failed outcome.
    #[must_use]
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            code: FAILURE_CODE,
            is_error: true,
            error_messages: Some(errors),
            message: None,
            result: None,
        }
    }

    /// Wraps a failed outcome that still carries diagnostic payload, such as
    /// the account view returned when sign-in hits a tombstoned account.
    #[must_use]
    pub fn failure_with_result(errors: Vec<String>, result: Value) -> Self {
        Self {
            code: FAILURE_CODE,
            is_error: true,
            error_messages: Some(errors),
            message: None,
            result: Some(result),
        }
    }
}
