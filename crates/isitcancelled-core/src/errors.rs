use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Message carried by every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// The uniform 404 used for every failed cache read.
    ///
    /// The underlying cause is kept out of the response body.
    pub fn resource_not_found() -> Self {
        Self::not_found(anyhow::anyhow!(NOT_FOUND_MESSAGE))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_resource_not_found_body() {
        let (status, body) = body_json(AppError::resource_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let err = AppError::bad_request(anyhow::anyhow!("class_id is required"));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "class_id is required");
    }

    #[test]
    fn test_constructors_produce_client_errors_only() {
        let errors = [
            AppError::resource_not_found(),
            AppError::not_found(anyhow::anyhow!("missing")),
            AppError::bad_request(anyhow::anyhow!("invalid")),
        ];

        for err in errors {
            assert!(err.status.is_client_error(), "{}", err.status);
        }
    }
}
