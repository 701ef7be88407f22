//! Response bodies and the [`Reply`] descriptor returned by the responders.
//!
//! Field names are part of the wire contract with clients.

use crate::catalog;
use serde::Serialize;

/// Content of the success body on the random fault path.
pub const SUCCESS: &str = "success";

/// Body of a simulated fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Status code, identical to the one on the response.
    pub status: i32,
    /// Reason phrase for `status`.
    pub error: String,
    /// Construction time, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ErrorResponse {
    /// Create an `ErrorResponse` for `status`, stamped with the current time.
    pub fn new(status: i32) -> Self {
        Self::at(status, chrono::Utc::now().timestamp_millis())
    }

    /// Create an `ErrorResponse` for `status` with an explicit timestamp.
    pub fn at(status: i32, timestamp: i64) -> Self {
        ErrorResponse {
            status,
            error: catalog::reason_phrase(status).to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    pub content: String,
}

impl Default for SuccessResponse {
    fn default() -> Self {
        SuccessResponse {
            content: SUCCESS.to_string(),
        }
    }
}

/// Body of a request rejected before any fault logic ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
}

impl ValidationErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ValidationErrorResponse {
            error: error.into(),
        }
    }
}

/// Any body a responder produces.
///
/// Structured variants serialize as JSON objects, `Text` as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Error(ErrorResponse),
    Success(SuccessResponse),
    Validation(ValidationErrorResponse),
    Text(String),
}

/// Framework independent response: a status code and a body.
///
/// `status` is not restricted to valid HTTP codes. Rendering decides what
/// happens to codes that cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: i32,
    pub body: Body,
}

impl Reply {
    /// Simulated fault with the given status code.
    pub fn fault(status: i32) -> Self {
        Reply {
            status,
            body: Body::Error(ErrorResponse::new(status)),
        }
    }

    /// `200 OK` with the success body.
    pub fn success() -> Self {
        Reply {
            status: 200,
            body: Body::Success(SuccessResponse::default()),
        }
    }

    /// `400 Bad Request` with a validation message.
    pub fn invalid(error: impl Into<String>) -> Self {
        Reply {
            status: 400,
            body: Body::Validation(ValidationErrorResponse::new(error)),
        }
    }

    /// `200 OK` with a plain text message.
    pub fn text(message: impl Into<String>) -> Self {
        Reply {
            status: 200,
            body: Body::Text(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_json() {
        let body = ErrorResponse::at(404, 1_700_000_000_123);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": 404, "error": "Not Found", "timestamp": 1_700_000_000_123_i64})
        );
    }

    #[test]
    fn error_response_unknown_status() {
        let body = ErrorResponse::at(-7, 0);
        assert_eq!(body.status, -7);
        assert_eq!(body.error, catalog::UNKNOWN_ERROR);
    }

    #[test]
    fn error_response_timestamp_is_now() {
        let before = chrono::Utc::now().timestamp_millis();
        let body = ErrorResponse::new(500);
        let after = chrono::Utc::now().timestamp_millis();

        assert!(before <= body.timestamp && body.timestamp <= after);
    }

    #[test]
    fn body_json() {
        assert_eq!(
            serde_json::to_value(Reply::success().body).unwrap(),
            json!({"content": "success"})
        );
        assert_eq!(
            serde_json::to_value(Reply::invalid("nope").body).unwrap(),
            json!({"error": "nope"})
        );
        assert_eq!(
            serde_json::to_value(Reply::text("done").body).unwrap(),
            json!("done")
        );
    }

    #[test]
    fn reply_statuses() {
        assert_eq!(Reply::fault(503).status, 503);
        assert_eq!(Reply::success().status, 200);
        assert_eq!(Reply::invalid("x").status, 400);
        assert_eq!(Reply::text("x").status, 200);
    }
}
