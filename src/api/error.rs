// ABOUTME: Error taxonomy for the storefront API boundary

use thiserror::Error;

/// Failure of a single API call, split along the lines the panels care
/// about: the transport failed, the server rejected the request outright,
/// or a 2xx body carried an application-level failure flag.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect, TLS, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 2xx response whose body signals failure via an `error`/`success` flag.
    #[error("{0}")]
    Application(String),

    /// 2xx response missing the fields the contract promises.
    #[error("malformed response: {0}")]
    Shape(String),
}

impl ApiError {
    /// Human-readable one-liner for the panel error slot.
    pub fn panel_message(&self) -> String {
        match self {
            Self::Transport(_) | Self::Status { .. } => {
                "Request failed. Please try again.".to_string()
            }
            Self::Application(msg) => msg.clone(),
            Self::Shape(msg) => format!("Unexpected server response: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_message_passes_through() {
        let err = ApiError::Application("store not found".to_string());
        assert_eq!(err.panel_message(), "store not found");
    }

    #[test]
    fn status_message_is_generic() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(err.panel_message(), "Request failed. Please try again.");
        assert!(err.to_string().contains("500"));
    }
}
