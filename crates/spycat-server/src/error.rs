//! Mapping of domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;
use spycat_core::{AgencyError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Agency(#[from] AgencyError),
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Agency(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                // Rule violations are reported as bad requests, not 409
                ErrorKind::InvalidInput | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let ApiError::Agency(err) = &self;
        if status.is_server_error() {
            error!("Request failed: {err}");
        }

        let body = ErrorBody {
            detail: err.detail(),
        };
        (status, Json(body)).into_response()
    }
}
