//! Error taxonomy for API calls.

use super::types::MessageResponse;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, TLS).
    #[error("API request failed: {0}")]
    Request(String),

    /// 400: validation or business-rule rejection.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 401: missing, expired or foreign credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// 404: no record with that id.
    #[error("not found")]
    NotFound,

    /// Any other non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classify a non-success response.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::BadRequest(server_message(&body).unwrap_or(body)),
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Status { status, body },
        }
    }

    /// The server's rejection for a duplicate registration email.
    #[must_use]
    pub fn is_email_taken(&self) -> bool {
        matches!(self, Self::BadRequest(message) if message.contains("already taken"))
    }
}

/// Pull `message` out of a `{"message": ...}` envelope.
fn server_message(body: &str) -> Option<String> {
    let Ok(envelope) = serde_json::from_str::<MessageResponse>(body) else {
        return None;
    };
    Some(envelope.message)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
