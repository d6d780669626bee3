#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch data: {0}")]
    FetchError(String),

    #[error("Upstream returned status {status}")]
    StatusError { status: u16, body: String },

    #[error("Error parsing content: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API key is not set ({0})")]
    MissingApiKey(&'static str),

    #[error("Failed to write output: {0}")]
    OutputError(String),
}

impl AppError {
    /// Raw upstream body attached to the error, if the server sent one.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            AppError::StatusError { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::OutputError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::OutputError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_body() {
        let err = AppError::StatusError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.upstream_body(), Some("boom"));
        assert_eq!(err.to_string(), "Upstream returned status 500");
    }

    #[test]
    fn empty_body_is_not_reported() {
        let err = AppError::StatusError {
            status: 403,
            body: String::new(),
        };
        assert_eq!(err.upstream_body(), None);
        assert_eq!(AppError::FetchError("x".into()).upstream_body(), None);
    }
}
