use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Query too long")]
    QueryTooLong,

    #[error("Malformed domain")]
    MalformedDomain,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::QueryTooLong { .. } => StatusCode::BAD_REQUEST,
            AppError::MalformedDomain { .. } => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
