//! Handlers for `/citizens` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/citizens` | All citizens |
//! | `GET`    | `/citizens/ofHouse/{house_id}` | Residents of a house |
//! | `GET`    | `/citizens/ofWorkplace/{workplace_id}` | Workers of a building |
//! | `GET`    | `/citizens/{id}` | `null` if not found |
//! | `POST`   | `/citizens` | Body: [`Citizen`] |
//! | `PUT`    | `/citizens/{id}` | Body: [`Citizen`]; 404 if not found |
//! | `DELETE` | `/citizens/{id}` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use township_core::{citizen::Citizen, store::TownStore};

use crate::{AppState, error::ApiError};

/// `GET /citizens`
pub async fn list<S: TownStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Citizen>>, ApiError> {
  Ok(Json(state.citizens.get_all_citizens().await?))
}

/// `GET /citizens/ofHouse/{house_id}`
pub async fn of_house<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(house_id): Path<i64>,
) -> Result<Json<Vec<Citizen>>, ApiError> {
  Ok(Json(state.citizens.get_citizens_of_house(house_id).await?))
}

/// `GET /citizens/ofWorkplace/{workplace_id}`
pub async fn of_workplace<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(workplace_id): Path<i64>,
) -> Result<Json<Vec<Citizen>>, ApiError> {
  Ok(Json(state.citizens.get_citizens_of_workplace(workplace_id).await?))
}

/// `GET /citizens/{id}`
pub async fn get_one<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Option<Citizen>>, ApiError> {
  Ok(Json(state.citizens.find_citizen(id).await?))
}

/// `POST /citizens`
pub async fn create<S: TownStore>(
  State(state): State<AppState<S>>,
  Json(citizen): Json<Citizen>,
) -> Result<StatusCode, ApiError> {
  state.citizens.insert_citizen(citizen).await?;
  Ok(StatusCode::OK)
}

/// `PUT /citizens/{id}`
pub async fn update<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(citizen): Json<Citizen>,
) -> Result<StatusCode, ApiError> {
  state.citizens.update_citizen(id, citizen).await?;
  Ok(StatusCode::OK)
}

/// `DELETE /citizens/{id}`
pub async fn delete<S: TownStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  state.citizens.delete_citizen(id).await?;
  Ok(StatusCode::OK)
}
