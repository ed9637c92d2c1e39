use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure here originates upstream or in our plumbing; the cause
        // stays in the logs.
        tracing::error!(error = %self, "Request failed");

        let body = Json(json!({
            "error": "upstream request failed"
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_map_to_internal_server_error() {
        let errors = vec![
            AppError::ExternalApi("YouTube API returned status 403".to_string()),
            AppError::Decode(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_display_keeps_cause() {
        let error = AppError::ExternalApi("status 500".to_string());
        assert_eq!(error.to_string(), "External API error: status 500");
    }
}
