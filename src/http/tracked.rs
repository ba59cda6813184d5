//! Tracked rows of one category as JSON.

use crate::{
  app::AppState,
  db::tracking,
  http::error::ApiError,
  models::{
    request::tracked_params::ListParams,
    tracking::{category::Category, tracked_email::TrackedEmail},
  },
};
use axum::{
  Json,
  extract::{Path as AxumPath, Query, State, rejection::QueryRejection},
};
use tracing::error;

/// Resolve paging and the optional address filter: `(limit, offset, email)`.
pub fn compute_list_params(p: &ListParams) -> (u32, u32, Option<&str>) {
  let page = p.page.unwrap_or(1).max(1);
  let limit = p.limit.unwrap_or(50).clamp(1, 200);
  let offset = (page - 1).saturating_mul(limit);
  let email = p.email.as_deref().map(str::trim).filter(|s| !s.is_empty());
  (limit, offset, email)
}

pub async fn list_category(
  State(state): State<AppState>,
  AxumPath(category): AxumPath<String>,
  query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<TrackedEmail>>, ApiError> {
  let category: Category = category.parse()?;
  let Query(params) = query?;
  let (limit, offset, email) = compute_list_params(&params);
  match tracking::list_tracked(&state.db, category, email, limit, offset).await {
    Ok(rows) => Ok(Json(rows)),
    Err(e) => {
      error!("list {category} error: {e}");
      Err(e.into())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_and_clamping() {
    let p = ListParams::default();
    assert_eq!(compute_list_params(&p), (50, 0, None));

    let p = ListParams {
      email: Some("  ".into()),
      page: Some(0),
      limit: Some(1000),
    };
    assert_eq!(compute_list_params(&p), (200, 0, None));

    let p = ListParams {
      email: Some(" a@x.test ".into()),
      page: Some(3),
      limit: Some(10),
    };
    assert_eq!(compute_list_params(&p), (10, 20, Some("a@x.test")));
  }
}
