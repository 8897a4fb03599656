//! JSON REST API for Township.
//!
//! Exposes an axum [`Router`] backed by any [`TownStore`]. The handlers are
//! thin adapters: every rule lives in the `township-core` services, and
//! [`ApiError`] maps their failures to status codes (missing → 404, occupied
//! allotment → 409, storage → 500).
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", township_api::api_router(store.clone()))
//! ```

pub mod allotments;
pub mod buildings;
pub mod citizens;
pub mod error;
pub mod houses;

use std::sync::Arc;

use axum::{Router, routing::get};
use township_core::{
  services::{AllotmentService, BuildingService, CitizenService, HouseService},
  store::TownStore,
};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// One of each domain service, all sharing a single backend.
pub struct AppState<S> {
  pub allotments: AllotmentService<S, S>,
  pub buildings:  BuildingService<S>,
  pub citizens:   CitizenService<S>,
  pub houses:     HouseService<S, S, S>,
}

impl<S: TownStore> AppState<S> {
  /// Wire the services together over `store`.
  pub fn new(store: Arc<S>) -> Self {
    let buildings = BuildingService::new(store.clone());
    let allotments = AllotmentService::new(store.clone(), buildings.clone());
    Self {
      houses: HouseService::new(store.clone(), buildings.clone(), allotments.clone()),
      citizens: CitizenService::new(store),
      allotments,
      buildings,
    }
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      allotments: self.allotments.clone(),
      buildings:  self.buildings.clone(),
      citizens:   self.citizens.clone(),
      houses:     self.houses.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S: TownStore>(store: Arc<S>) -> Router<()> {
  Router::new()
    // Citizens
    .route("/citizens", get(citizens::list::<S>).post(citizens::create::<S>))
    .route("/citizens/ofHouse/{house_id}", get(citizens::of_house::<S>))
    .route("/citizens/ofWorkplace/{workplace_id}", get(citizens::of_workplace::<S>))
    .route(
      "/citizens/{id}",
      get(citizens::get_one::<S>)
        .put(citizens::update::<S>)
        .delete(citizens::delete::<S>),
    )
    // Houses
    .route("/houses", get(houses::list::<S>).post(houses::create::<S>))
    .route(
      "/houses/{id}",
      get(houses::get_one::<S>)
        .put(houses::update::<S>)
        .delete(houses::delete::<S>),
    )
    .route("/houses/{id}/allotment", get(houses::allotment::<S>))
    // Buildings
    .route("/buildings", get(buildings::list::<S>).post(buildings::create::<S>))
    .route(
      "/buildings/{id}",
      get(buildings::get_one::<S>)
        .put(buildings::update::<S>)
        .delete(buildings::delete::<S>),
    )
    // Allotments
    .route("/allotments", get(allotments::list::<S>).post(allotments::create::<S>))
    .route("/allotments/vacant", get(allotments::vacant::<S>))
    .route(
      "/allotments/{id}",
      get(allotments::get_one::<S>)
        .put(allotments::update::<S>)
        .delete(allotments::delete::<S>),
    )
    .with_state(AppState::new(store))
}
