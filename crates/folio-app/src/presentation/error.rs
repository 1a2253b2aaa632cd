use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Errors that reach the HTTP boundary.
///
/// Data problems never get here: they degrade to empty lists and raw keys further down.
/// What is left is the page itself failing to render.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(status = status.as_u16(), "Request failed: {:#}", self);
        (status, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::ErrorKind;

    #[test]
    fn test_template_error_is_500() {
        let err = AppError::from(minijinja::Error::new(
            ErrorKind::TemplateNotFound,
            "home.html",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
