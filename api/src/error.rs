use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`].
///
/// Every call is a single attempt: no retry, no backoff, no timeout.
/// `Unauthorized` is special-cased so the UI can force a re-login; all
/// other variants end up in a toast via [`ApiError::user_message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure before an HTTP status was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// HTTP 401. The session store has already been cleared by the time
    /// this is returned.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx status. `message` is the backend's `message`
    /// field when the body carried one.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user, falling back to a
    /// generic string when the server gave nothing usable.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Session expired. Please log in again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: "Roll number already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Roll number already exists");
    }

    #[test]
    fn test_user_message_generic_fallbacks() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");

        let err = ApiError::Transport("connection reset".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
