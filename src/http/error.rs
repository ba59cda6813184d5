//! Handler error type and its HTTP mapping.

use crate::{
  db::tracking::PersistError, models::tracking::category::UnknownCategory, source::SourceError,
};
use axum::{
  Json,
  extract::rejection::QueryRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  #[error("Invalid JSON body")]
  InvalidBody(#[source] serde_json::Error),
  #[error("Missing {0}")]
  MissingField(&'static str),
  #[error("Invalid query: {0}")]
  InvalidQuery(String),
  #[error(transparent)]
  UnknownCategory(#[from] UnknownCategory),
  #[error(transparent)]
  Persist(#[from] PersistError),
  #[error(transparent)]
  Source(#[from] SourceError),
  #[error(transparent)]
  Database(#[from] sqlx::Error),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::InvalidBody(_) | ApiError::MissingField(_) | ApiError::InvalidQuery(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::UnknownCategory(_) => StatusCode::NOT_FOUND,
      ApiError::Persist(_) | ApiError::Source(_) | ApiError::Database(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::InvalidQuery(rejection.body_text())
  }
}

/// Every failure is a JSON `{"error": ...}` body; server errors expose the error text as-is.
impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_errors_are_client_errors() {
    let err = ApiError::MissingField("userId");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Missing userId");
  }

  #[test]
  fn persistence_errors_are_server_errors_with_bare_driver_text() {
    let err = ApiError::from(PersistError {
      table: "email_info",
      source: sqlx::Error::RowNotFound,
    });
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
  }
}
