//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use joiners_core::validate::{ValidationError, Violation};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("identification number {0} is already taken")]
  DuplicateIdentifier(i64),

  #[error("joiner not found")]
  NotFound(Uuid),

  /// The request could not be decoded at all (bad JSON, missing content
  /// type, malformed query string). Always a 400.
  #[error("{0}")]
  Rejected(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<joiners_core::Error> for ApiError {
  fn from(e: joiners_core::Error) -> Self {
    match e {
      joiners_core::Error::DuplicateIdentifier(n) => Self::DuplicateIdentifier(n),
      joiners_core::Error::NotFound(id) => Self::NotFound(id),
      joiners_core::Error::Store(e) => Self::Store(e),
    }
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_)
      | ApiError::DuplicateIdentifier(_)
      | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
  code:    u16,
  message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  details: Option<&'a [Violation]>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      // Backend detail stays in the logs.
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        "internal server error".to_owned()
      }
      other => other.to_string(),
    };
    let details = match &self {
      ApiError::Validation(v) => Some(v.violations.as_slice()),
      _ => None,
    };
    let body = ErrorBody { code: status.as_u16(), message, details };
    (status, Json(body)).into_response()
  }
}
