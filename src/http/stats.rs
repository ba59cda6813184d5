//! Per-category counters for one account address.

use crate::{
  app::AppState,
  db::tracking::count_tracked,
  http::error::ApiError,
  models::{
    request::tracked_params::StatsParams, response::stats_response::StatsResponse,
    tracking::category::Category,
  },
};
use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use tracing::error;

pub async fn tracking_stats(
  State(state): State<AppState>,
  query: Result<Query<StatsParams>, QueryRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
  let Query(params) = query?;
  let email = params
    .email
    .map(|e| e.trim().to_string())
    .filter(|e| !e.is_empty())
    .ok_or(ApiError::MissingField("email"))?;

  let mut stats = StatsResponse {
    email,
    ..Default::default()
  };
  for category in Category::ALL {
    let n = count_tracked(&state.db, category, &stats.email, params.start, params.end)
      .await
      .map_err(|e| {
        error!("stats {category} error: {e}");
        ApiError::from(e)
      })?;
    match category {
      Category::Info => stats.info = n,
      Category::Pub => stats.pub_ = n,
      Category::Traite => stats.traite = n,
    }
  }
  stats.total = stats.info + stats.pub_ + stats.traite;
  Ok(Json(stats))
}
