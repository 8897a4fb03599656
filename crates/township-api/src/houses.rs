//! Handlers for `/houses` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/houses` | All houses |
//! | `GET`    | `/houses/{id}` | `null` if not found |
//! | `GET`    | `/houses/{id}/allotment` | 404 if house or allotment is missing |
//! | `POST`   | `/houses` | Body: [`House`]; 409 if the allotment is taken |
//! | `PUT`    | `/houses/{id}` | Body: [`House`]; 404 if not found |
//! | `DELETE` | `/houses/{id}` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use township_core::{allotment::Allotment, building::House, store::TownStore};

use crate::{AppState, error::ApiError};

/// `GET /houses`
pub async fn list<S: TownStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<House>>, ApiError> {
  Ok(Json(state.houses.get_all_houses().await?))
}

/// `GET /houses/{id}`
pub async fn get_one<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Option<House>>, ApiError> {
  Ok(Json(state.houses.find_house(id).await?))
}

/// `GET /houses/{id}/allotment`
pub async fn allotment<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Allotment>, ApiError> {
  Ok(Json(state.houses.get_allotment_of_house(id).await?))
}

/// `POST /houses`
pub async fn create<S: TownStore>(
  State(state): State<AppState<S>>,
  Json(house): Json<House>,
) -> Result<StatusCode, ApiError> {
  state.houses.create_house(house).await?;
  Ok(StatusCode::OK)
}

/// `PUT /houses/{id}`
pub async fn update<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(house): Json<House>,
) -> Result<StatusCode, ApiError> {
  state.houses.update_house(id, house).await?;
  Ok(StatusCode::OK)
}

/// `DELETE /houses/{id}`
pub async fn delete<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  state.houses.delete_house(id).await?;
  Ok(StatusCode::OK)
}
