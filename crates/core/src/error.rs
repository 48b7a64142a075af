//! Error types for the backend client, configuration loading, and the
//! user-visible errors the view displays.

use thiserror::Error;

/// Failure talking to the search backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` comes from the body's `error` field when
    /// present, otherwise it names the status code.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(status: u16, body_error: Option<String>) -> Self {
        let message = body_error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        ClientError::Status { status, message }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors surfaced to the user. None of them is fatal: every one leaves the
/// view interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Please enter a research question.")]
    EmptyQuery,

    #[error("Backend service is not available. Please check if the server is running.")]
    BackendUnavailable,

    #[error("Search failed: {0}")]
    SearchFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_body_message() {
        let err = ClientError::status(500, Some("index not loaded".into()));
        assert_eq!(err.to_string(), "index not loaded");
    }

    #[test]
    fn status_error_falls_back_to_code() {
        assert_eq!(ClientError::status(502, None).to_string(), "HTTP error! status: 502");
        assert_eq!(
            ClientError::status(404, Some(String::new())).to_string(),
            "HTTP error! status: 404"
        );
    }

    #[test]
    fn view_errors_render_user_messages() {
        assert_eq!(ViewError::EmptyQuery.to_string(), "Please enter a research question.");
        assert_eq!(
            ViewError::SearchFailed("timeout".into()).to_string(),
            "Search failed: timeout"
        );
    }
}
