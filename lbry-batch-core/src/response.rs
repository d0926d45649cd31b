//! Response parsing shared by the daemon and the thumbnail host.
//!
//! The daemon answers with either `result` or `error`; the thumbnail host with
//! either `data` or `error`. A `ValueError` reported under
//! `error.data.name` is the only error shape with a known meaning.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::PublishError;

/// The success field expected in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseField {
    /// JSON-RPC style bodies from the local daemon.
    Result,
    /// Bodies from the thumbnail host.
    Data,
}

impl ResponseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseField::Result => "result",
            ResponseField::Data => "data",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const VALIDATION_ERROR_NAME: &str = "ValueError";

/// Tagged outcome of a single remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Ok(Value),
    ValidationError(String),
    UnexpectedError(Value),
}

impl ApiResponse {
    pub fn parse(body: &Value, field: ResponseField) -> Self {
        if let Some(value) = body.get(field.as_str()) {
            return ApiResponse::Ok(value.clone());
        }

        let error = body.get("error");
        let name = error
            .and_then(|e| e.get("data"))
            .and_then(|d| d.get("name"))
            .and_then(Value::as_str);

        let message = error.and_then(|e| e.get("message")).and_then(Value::as_str);
        match (name, message) {
            (Some(VALIDATION_ERROR_NAME), Some(message)) => {
                ApiResponse::ValidationError(message.to_string())
            }
            // A ValueError without a textual message is a malformed body.
            _ => ApiResponse::UnexpectedError(body.clone()),
        }
    }

    pub fn into_result(self, field: ResponseField) -> Result<Value, PublishError> {
        match self {
            ApiResponse::Ok(value) => Ok(value),
            ApiResponse::ValidationError(message) => Err(PublishError::Validation(message)),
            ApiResponse::UnexpectedError(body) => {
                Err(PublishError::UnexpectedResponse { field, body })
            }
        }
    }
}

/// Returns `body[field]`, or the remote error it carries instead.
pub fn get_field(body: &Value, field: ResponseField) -> Result<Value, PublishError> {
    ApiResponse::parse(body, field).into_result(field)
}
