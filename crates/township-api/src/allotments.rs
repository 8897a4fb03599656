//! Handlers for `/allotments` endpoints.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use township_core::{allotment::Allotment, store::TownStore};

use crate::{AppState, error::ApiError};

/// `GET /allotments`
pub async fn list<S: TownStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Allotment>>, ApiError> {
  Ok(Json(state.allotments.get_all_allotments().await?))
}

/// `GET /allotments/vacant`: allotments with no building on them.
pub async fn vacant<S: TownStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Allotment>>, ApiError> {
  Ok(Json(state.allotments.get_vacant_allotments().await?))
}

/// `GET /allotments/{id}`
pub async fn get_one<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Option<Allotment>>, ApiError> {
  Ok(Json(state.allotments.find_allotment(id).await?))
}

/// `POST /allotments`
pub async fn create<S: TownStore>(
  State(state): State<AppState<S>>,
  Json(allotment): Json<Allotment>,
) -> Result<StatusCode, ApiError> {
  state.allotments.create_allotment(allotment).await?;
  Ok(StatusCode::OK)
}

/// `PUT /allotments/{id}`
pub async fn update<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(allotment): Json<Allotment>,
) -> Result<StatusCode, ApiError> {
  state.allotments.update_allotment(id, allotment).await?;
  Ok(StatusCode::OK)
}

/// `DELETE /allotments/{id}`
pub async fn delete<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  state.allotments.delete_allotment(id).await?;
  Ok(StatusCode::OK)
}
