//! Mail polling endpoints: fetch, categorize and record each message.

use crate::{
  app::AppState,
  db::tracking::insert_tracked,
  http::error::ApiError,
  models::{
    request::poll_request::{PollRequest, UnreadRequest},
    response::poll_response::PollResponse,
    tracking::record::TrackingRecord,
  },
  source::{FetchMode, FetchRequest},
};
use axum::{Json, body::Bytes, extract::State};
use serde::de::DeserializeOwned;
use tracing::{error, info};

/// Decode a JSON body. An empty body or `null` yields the default, so that
/// field validation reports what is missing.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(T::default());
  }
  let parsed: Option<T> = serde_json::from_slice(body).map_err(ApiError::InvalidBody)?;
  Ok(parsed.unwrap_or_default())
}

fn required_fields(
  email: Option<String>,
  user_id: Option<String>,
) -> Result<(String, String), ApiError> {
  let email = email.ok_or(ApiError::MissingField("email"))?;
  let user_id = user_id
    .filter(|u| !u.is_empty())
    .ok_or(ApiError::MissingField("userId"))?;
  Ok((email, user_id))
}

pub async fn poll_emails(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<PollResponse>, ApiError> {
  let req: PollRequest = parse_body(&body)?;
  let (email, user_id) = required_fields(req.email, req.user_id)?;
  let fetch = FetchRequest {
    email,
    user_id,
    mode: FetchMode::Poll {
      password: req.password,
      imap_server: req.imap_server,
    },
  };
  match track_retrieved(&state, fetch).await {
    Ok(out) => Ok(Json(out)),
    Err(e) => {
      error!("poll-emails failed: {e}");
      Err(e)
    }
  }
}

pub async fn unread_emails(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<PollResponse>, ApiError> {
  let req: UnreadRequest = parse_body(&body)?;
  let (email, user_id) = required_fields(req.email, req.user_id)?;
  let fetch = FetchRequest {
    email,
    user_id,
    mode: FetchMode::Unread {
      refresh_token: req.refresh_token,
      provider: req.provider,
      imap_server: req.imap_server,
    },
  };
  match track_retrieved(&state, fetch).await {
    Ok(out) => Ok(Json(out)),
    Err(e) => {
      error!("unread-emails failed: {e}");
      Err(e)
    }
  }
}

/// Rows are committed one by one; a failure leaves earlier rows in place.
async fn track_retrieved(state: &AppState, fetch: FetchRequest) -> Result<PollResponse, ApiError> {
  let messages = state.source.fetch(&fetch).await?;
  let count = messages.len();

  let mut conn = state.db.acquire().await?;
  for msg in messages {
    let category = state.categorizer.categorize(&msg);
    let record = TrackingRecord::new(category, msg.into_tracked(&fetch.user_id, &fetch.email));
    insert_tracked(&mut conn, &record).await?;
  }

  info!("tracked {count} message(s) for {}", fetch.email);
  Ok(PollResponse::success(count, fetch.email))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_or_null_body_reports_missing_email() {
    for body in [&b""[..], &b"  "[..], &b"null"[..]] {
      let req: PollRequest = parse_body(body).unwrap();
      let err = required_fields(req.email, req.user_id).unwrap_err();
      assert_eq!(err.to_string(), "Missing email");
    }
  }

  #[test]
  fn malformed_body_is_rejected() {
    let err = parse_body::<PollRequest>(b"{not json").unwrap_err();
    assert!(matches!(err, ApiError::InvalidBody(_)));
  }

  #[test]
  fn non_object_body_is_rejected() {
    for body in [&br#""abc""#[..], &b"42"[..], &b"true"[..]] {
      let err = parse_body::<UnreadRequest>(body).unwrap_err();
      assert!(matches!(err, ApiError::InvalidBody(_)));
      assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
      assert_eq!(err.to_string(), "Invalid JSON body");
    }
  }

  #[test]
  fn empty_user_id_counts_as_missing() {
    let req: UnreadRequest = parse_body(br#"{"email":"a@x.test","userId":""}"#).unwrap();
    let err = required_fields(req.email, req.user_id).unwrap_err();
    assert_eq!(err.to_string(), "Missing userId");
  }

  #[test]
  fn camel_case_fields_are_read() {
    let req: UnreadRequest = parse_body(
      br#"{"email":"a@x.test","userId":"u1","refreshToken":"t","provider":"outlook","imapServer":"imap.x"}"#,
    )
    .unwrap();
    assert_eq!(req.refresh_token.as_deref(), Some("t"));
    assert_eq!(req.provider.as_deref(), Some("outlook"));
    assert_eq!(req.imap_server.as_deref(), Some("imap.x"));
    assert_eq!(
      required_fields(req.email, req.user_id).unwrap(),
      ("a@x.test".to_string(), "u1".to_string())
    );
  }
}
