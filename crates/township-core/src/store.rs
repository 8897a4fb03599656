//! Persistence ports, one per entity.
//!
//! The traits are implemented by storage backends (e.g.
//! `township-store-sqlite`). Services depend on these abstractions, never on
//! a concrete backend.
//!
//! All calls are single, independent operations: no transactions, batching,
//! or retries. Ids of `0` passed to `create_*` ask the backend to assign one.

use std::future::Future;

use crate::{
  allotment::Allotment,
  building::{Building, House},
  citizen::Citizen,
};

// ─── Allotments ──────────────────────────────────────────────────────────────

pub trait AllotmentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn select_all_allotments(
    &self,
  ) -> impl Future<Output = Result<Vec<Allotment>, Self::Error>> + Send + '_;

  fn select_allotment_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Allotment>, Self::Error>> + Send + '_;

  /// Persist `allotment` and return its id.
  fn create_allotment(
    &self,
    allotment: Allotment,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Replace every field of row `id`; returns the number of rows affected.
  fn update_allotment(
    &self,
    id: i64,
    allotment: Allotment,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn delete_allotment(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

// ─── Buildings ───────────────────────────────────────────────────────────────

/// Access to every building regardless of kind.
pub trait BuildingStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn select_all_buildings(
    &self,
  ) -> impl Future<Output = Result<Vec<Building>, Self::Error>> + Send + '_;

  fn select_building_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Building>, Self::Error>> + Send + '_;

  fn create_building(
    &self,
    building: Building,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn update_building(
    &self,
    id: i64,
    building: Building,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn delete_building(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

// ─── Houses ──────────────────────────────────────────────────────────────────

/// Access restricted to buildings of kind [`House`](crate::building::BuildingKind::House).
pub trait HouseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn select_all_houses(
    &self,
  ) -> impl Future<Output = Result<Vec<House>, Self::Error>> + Send + '_;

  fn select_house_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<House>, Self::Error>> + Send + '_;

  fn create_house(
    &self,
    house: House,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn update_house(
    &self,
    id: i64,
    house: House,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn delete_house(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

// ─── Citizens ────────────────────────────────────────────────────────────────

pub trait CitizenStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn select_all_citizens(
    &self,
  ) -> impl Future<Output = Result<Vec<Citizen>, Self::Error>> + Send + '_;

  fn select_citizen_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Citizen>, Self::Error>> + Send + '_;

  fn create_citizen(
    &self,
    citizen: Citizen,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn update_citizen(
    &self,
    id: i64,
    citizen: Citizen,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  fn delete_citizen(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

// ─── Combined ────────────────────────────────────────────────────────────────

/// A single backend serving every port. Blanket-implemented.
pub trait TownStore:
  AllotmentStore + BuildingStore + CitizenStore + HouseStore + Clone + 'static
{
}

impl<T> TownStore for T where
  T: AllotmentStore + BuildingStore + CitizenStore + HouseStore + Clone + 'static
{
}
