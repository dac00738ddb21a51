//! Structured error types for binding-friendly API.
//!
//! The analyzer and renderer never fail; these errors come from decoding
//! requests at the JSON boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error codes for xmlpack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Arguments are not valid JSON.
    InvalidJson,
    /// Unknown operation mode.
    UnknownMode,
    /// A field is missing or has the wrong type.
    InvalidSettings,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::UnknownMode => write!(f, "unknown_mode"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlpackError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl XmlpackError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidJson, format!("Invalid JSON: {err}"))
    }

    pub fn unknown_mode(mode: &str) -> Self {
        Self::with_details(
            ErrorCode::UnknownMode,
            format!("Unknown mode: {mode}"),
            "expected one of: analyze, render, process, templates, version",
        )
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Missing required field '{field}'"),
        )
    }

    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid value for '{field}': expected {expected}"),
        )
    }
}

impl fmt::Display for XmlpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "[{}] {}: {}", self.code, self.message, details),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for XmlpackError {}

impl From<serde_json::Error> for XmlpackError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

/// `{"ok": true, "data": ...}` or `{"ok": false, "error": {...}}`.
///
/// Serializing the envelope cannot realistically fail; if it does, the
/// response is a literal `internal_error` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<XmlpackError>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &XmlpackError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.clone()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            format!(
                r#"{{"ok":false,"error":{{"code":"internal_error","message":{}}}}}"#,
                Value::String(err.to_string())
            )
        })
    }
}
