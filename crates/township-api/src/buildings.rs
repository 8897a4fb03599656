//! Handlers for `/buildings` endpoints. Every kind, houses included.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use township_core::{building::Building, store::TownStore};

use crate::{AppState, error::ApiError};

/// `GET /buildings`
pub async fn list<S: TownStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Building>>, ApiError> {
  Ok(Json(state.buildings.get_all_buildings().await?))
}

/// `GET /buildings/{id}`
pub async fn get_one<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Option<Building>>, ApiError> {
  Ok(Json(state.buildings.find_building(id).await?))
}

/// `POST /buildings`: 409 if the allotment is taken.
pub async fn create<S: TownStore>(
  State(state): State<AppState<S>>,
  Json(building): Json<Building>,
) -> Result<StatusCode, ApiError> {
  state.buildings.create_building(building).await?;
  Ok(StatusCode::OK)
}

/// `PUT /buildings/{id}`
pub async fn update<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(building): Json<Building>,
) -> Result<StatusCode, ApiError> {
  state.buildings.update_building(id, building).await?;
  Ok(StatusCode::OK)
}

/// `DELETE /buildings/{id}`
pub async fn delete<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  state.buildings.delete_building(id).await?;
  Ok(StatusCode::OK)
}
