use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when an error envelope carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Uniform wrapper returned by every account-service endpoint.
///
/// Every API call resolves to or rejects with exactly this shape, so callers
/// never branch on transport-level differences. Extra upstream fields such as
/// `time` and `path` are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    /// HTTP status code echoed by the service.
    pub code: u16,

    /// Textual status, e.g. `OK`, `CREATED`, `UNAUTHORIZED`.
    pub status: String,

    /// Human-readable message for banners and confirmations.
    #[serde(default)]
    pub message: String,

    /// Optional payload; absent on pure-acknowledgement responses.
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ResponseEnvelope<T> {
    /// Whether the service reported a success status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl ResponseEnvelope<()> {
    /// Builds a well-formed error envelope for a response whose body could
    /// not be parsed. The caller supplies the HTTP status code.
    #[must_use]
    pub fn fallback(code: u16) -> Self {
        Self {
            code,
            status: "ERROR".to_string(),
            message: GENERIC_ERROR_MESSAGE.to_string(),
            data: None,
        }
    }
}

/// Error produced by the API client layer.
///
/// `Api` carries the normalized error envelope from the service; `Transport`
/// covers failures where no envelope was received at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with an error envelope.
    #[error("{}", .0.message)]
    Api(ResponseEnvelope<()>),

    /// The request never produced a service response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// User-facing message, falling back to a generic one when the envelope
    /// lacks a message or the failure happened below the HTTP layer.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Api(envelope) if !envelope.message.is_empty() => &envelope.message,
            Self::Api(_) | Self::Transport(_) => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Status code of the error envelope, if the service produced one.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Api(envelope) => Some(envelope.code),
            Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_deserializes_without_data() {
        let json = r#"{"code":200,"status":"OK","message":"Password reset email sent"}"#;
        let envelope: ResponseEnvelope<()> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.status, "OK");
        assert_eq!(envelope.message, "Password reset email sent");
        assert!(envelope.data.is_none());
        assert!(envelope.is_success());
    }

    #[test]
    fn envelope_ignores_unknown_fields() {
        let json = r#"{"time":"2024-01-01T00:00:00","code":401,"path":"/user/profile","status":"UNAUTHORIZED","message":"You are not logged in"}"#;
        let envelope: ResponseEnvelope<()> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 401);
        assert!(!envelope.is_success());
    }

    #[test]
    fn envelope_missing_message_defaults_empty() {
        let json = r#"{"code":500,"status":"INTERNAL_SERVER_ERROR"}"#;
        let envelope: ResponseEnvelope<()> = serde_json::from_str(json).unwrap();
        assert!(envelope.message.is_empty());
    }

    #[test]
    fn fallback_envelope_is_well_formed() {
        let envelope = ResponseEnvelope::fallback(502);
        assert_eq!(envelope.code, 502);
        assert_eq!(envelope.status, "ERROR");
        assert_eq!(envelope.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn api_error_message_prefers_envelope_message() {
        let error = ApiError::Api(ResponseEnvelope {
            code: 400,
            status: "BAD_REQUEST".to_string(),
            message: "Email already in use".to_string(),
            data: None,
        });
        assert_eq!(error.message(), "Email already in use");
        assert_eq!(error.code(), Some(400));
    }

    #[test]
    fn api_error_message_falls_back_when_empty() {
        let error = ApiError::Api(ResponseEnvelope {
            code: 500,
            status: "INTERNAL_SERVER_ERROR".to_string(),
            message: String::new(),
            data: None,
        });
        assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn transport_error_has_generic_message_and_no_code() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(error.code(), None);
    }
}
