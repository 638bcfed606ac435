use thiserror::Error;

/// Errors that stop the server before it starts listening.
///
/// These are never produced while handling a request; `main` logs them and
/// exits with a non-zero status.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Cannot resolve AWS credentials: {0}")]
    MissingCredentials(String),
    #[error("Invalid CORS allowed origin: {0}")]
    InvalidOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_display() {
        let error = StartupError::MissingCredentials("no providers in chain".to_string());
        assert_eq!(
            error.to_string(),
            "Cannot resolve AWS credentials: no providers in chain"
        );
    }

    #[test]
    fn test_invalid_origin_display() {
        let error = StartupError::InvalidOrigin("bad origin".to_string());
        assert_eq!(error.to_string(), "Invalid CORS allowed origin: bad origin");
    }
}
