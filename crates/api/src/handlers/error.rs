use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_core::records::RecordError;
use portfolio_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error that wraps `anyhow::Error`.
///
/// The status code is picked by downcasting to the typed errors the handlers
/// produce; anything unrecognised is a 500. The body is always a short
/// plain-text message.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<RecordError>() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_404() {
        let error = AppError::from(RepositoryError::NotFound {
            entity_type: "Project",
            id: "p1".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_backend_failure_is_500() {
        let error = AppError::from(RepositoryError::QueryFailed("boom".to_string()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_id_mismatch_is_400() {
        let error = AppError::from(RecordError::IdMismatch {
            path_id: "a".to_string(),
            body_id: "b".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_body_is_400() {
        let error = AppError::from(RecordError::InvalidBody("expected value".to_string()));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_error_is_500() {
        let error = AppError::from(anyhow::anyhow!("unexpected"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_body_is_message() {
        let response = AppError::from(RepositoryError::NotFound {
            entity_type: "Certification",
            id: "c9".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
