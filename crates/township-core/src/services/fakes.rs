//! Call-recording in-memory stores for service tests.

use std::sync::Mutex;

use thiserror::Error;

use crate::{
  allotment::Allotment,
  building::{Building, House},
  citizen::Citizen,
  store::{AllotmentStore, BuildingStore, CitizenStore, HouseStore},
};

/// One recorded port invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call<T> {
  SelectAll,
  SelectById(i64),
  Create(T),
  Update(i64, T),
  Delete(i64),
}

#[derive(Debug, Error)]
#[error("fake store is offline")]
pub struct FakeError;

pub trait Record: Clone + Send + Sync {
  fn id(&self) -> i64;
  fn set_id(&mut self, id: i64);
}

impl Record for Allotment {
  fn id(&self) -> i64 { self.allotment_id }
  fn set_id(&mut self, id: i64) { self.allotment_id = id; }
}

impl Record for Building {
  fn id(&self) -> i64 { self.building_id }
  fn set_id(&mut self, id: i64) { self.building_id = id; }
}

impl Record for House {
  fn id(&self) -> i64 { self.house_id }
  fn set_id(&mut self, id: i64) { self.house_id = id; }
}

impl Record for Citizen {
  fn id(&self) -> i64 { self.citizen_id }
  fn set_id(&mut self, id: i64) { self.citizen_id = id; }
}

/// A table of `T` rows that records every call made against it.
pub struct FakeStore<T> {
  rows:    Mutex<Vec<T>>,
  calls:   Mutex<Vec<Call<T>>>,
  failing: bool,
}

impl<T: Record> FakeStore<T> {
  pub fn with_rows(rows: Vec<T>) -> Self {
    Self { rows: Mutex::new(rows), calls: Mutex::new(vec![]), failing: false }
  }

  pub fn empty() -> Self { Self::with_rows(vec![]) }

  /// A store whose every call fails with [`FakeError`].
  pub fn failing() -> Self {
    Self { failing: true, ..Self::empty() }
  }

  pub fn calls(&self) -> Vec<Call<T>> { self.calls.lock().unwrap().clone() }

  pub fn rows(&self) -> Vec<T> { self.rows.lock().unwrap().clone() }

  fn record(&self, call: Call<T>) -> Result<(), FakeError> {
    self.calls.lock().unwrap().push(call);
    if self.failing { Err(FakeError) } else { Ok(()) }
  }

  fn select_all(&self) -> Result<Vec<T>, FakeError> {
    self.record(Call::SelectAll)?;
    Ok(self.rows())
  }

  fn select_by_id(&self, id: i64) -> Result<Option<T>, FakeError> {
    self.record(Call::SelectById(id))?;
    Ok(self.rows().into_iter().find(|r| r.id() == id))
  }

  fn create(&self, row: T) -> Result<i64, FakeError> {
    self.record(Call::Create(row.clone()))?;
    let mut rows = self.rows.lock().unwrap();
    let mut row = row;
    if row.id() == 0 {
      let next = rows.iter().map(Record::id).max().unwrap_or(0) + 1;
      row.set_id(next);
    }
    let id = row.id();
    rows.push(row);
    Ok(id)
  }

  fn update(&self, id: i64, row: T) -> Result<usize, FakeError> {
    self.record(Call::Update(id, row.clone()))?;
    let mut rows = self.rows.lock().unwrap();
    let mut row = row;
    row.set_id(id);
    match rows.iter_mut().find(|r| r.id() == id) {
      Some(slot) => {
        *slot = row;
        Ok(1)
      }
      None => Ok(0),
    }
  }

  fn delete(&self, id: i64) -> Result<usize, FakeError> {
    self.record(Call::Delete(id))?;
    let mut rows = self.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| r.id() != id);
    Ok(before - rows.len())
  }
}

impl AllotmentStore for FakeStore<Allotment> {
  type Error = FakeError;

  async fn select_all_allotments(&self) -> Result<Vec<Allotment>, FakeError> {
    self.select_all()
  }

  async fn select_allotment_by_id(&self, id: i64) -> Result<Option<Allotment>, FakeError> {
    self.select_by_id(id)
  }

  async fn create_allotment(&self, allotment: Allotment) -> Result<i64, FakeError> {
    self.create(allotment)
  }

  async fn update_allotment(&self, id: i64, allotment: Allotment) -> Result<usize, FakeError> {
    self.update(id, allotment)
  }

  async fn delete_allotment(&self, id: i64) -> Result<usize, FakeError> {
    self.delete(id)
  }
}

impl BuildingStore for FakeStore<Building> {
  type Error = FakeError;

  async fn select_all_buildings(&self) -> Result<Vec<Building>, FakeError> {
    self.select_all()
  }

  async fn select_building_by_id(&self, id: i64) -> Result<Option<Building>, FakeError> {
    self.select_by_id(id)
  }

  async fn create_building(&self, building: Building) -> Result<i64, FakeError> {
    self.create(building)
  }

  async fn update_building(&self, id: i64, building: Building) -> Result<usize, FakeError> {
    self.update(id, building)
  }

  async fn delete_building(&self, id: i64) -> Result<usize, FakeError> {
    self.delete(id)
  }
}

impl HouseStore for FakeStore<House> {
  type Error = FakeError;

  async fn select_all_houses(&self) -> Result<Vec<House>, FakeError> {
    self.select_all()
  }

  async fn select_house_by_id(&self, id: i64) -> Result<Option<House>, FakeError> {
    self.select_by_id(id)
  }

  async fn create_house(&self, house: House) -> Result<i64, FakeError> {
    self.create(house)
  }

  async fn update_house(&self, id: i64, house: House) -> Result<usize, FakeError> {
    self.update(id, house)
  }

  async fn delete_house(&self, id: i64) -> Result<usize, FakeError> {
    self.delete(id)
  }
}

impl CitizenStore for FakeStore<Citizen> {
  type Error = FakeError;

  async fn select_all_citizens(&self) -> Result<Vec<Citizen>, FakeError> {
    self.select_all()
  }

  async fn select_citizen_by_id(&self, id: i64) -> Result<Option<Citizen>, FakeError> {
    self.select_by_id(id)
  }

  async fn create_citizen(&self, citizen: Citizen) -> Result<i64, FakeError> {
    self.create(citizen)
  }

  async fn update_citizen(&self, id: i64, citizen: Citizen) -> Result<usize, FakeError> {
    self.update(id, citizen)
  }

  async fn delete_citizen(&self, id: i64) -> Result<usize, FakeError> {
    self.delete(id)
  }
}
