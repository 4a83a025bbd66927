//! # HTTP API Errors
//!
//! Failure outcomes of the user endpoints and their rendering as the
//! failure envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ErrorResponse;
use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or empty required input
    #[error("{0}")]
    BadRequest(String),

    /// Request body is not valid JSON
    #[error("Invalid JSON body")]
    InvalidJson(String),

    /// Lookup found nothing
    #[error("{0}")]
    NotFound(String),

    /// No route matches method and path
    #[error("Route not found")]
    RouteNotFound,

    /// An extractor refused the request (undecodable path, oversized body)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store fault while serving a request
    #[error("{context}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Map a store fault to a 500 carrying `context` as its message
    pub fn internal(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |err| ApiError::Internal {
            context,
            detail: err.to_string(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail string exposed to the client, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::InvalidJson(detail) => Some(detail),
            ApiError::Internal { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        ErrorResponse::new(err.to_string(), err.detail().map(str::to_string))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, detail = ?self.detail(), "request failed");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
