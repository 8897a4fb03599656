use std::sync::Arc;

use crate::{
  EntityKind, Error, Result,
  allotment::Allotment,
  building::House,
  services::{AllotmentService, BuildingService, ensure_allotment_vacant},
  store::{AllotmentStore, BuildingStore, HouseStore},
};

/// House-specific rules on top of the house port.
///
/// Occupancy is checked against *all* buildings through [`BuildingService`],
/// not just houses, because a workplace blocks an allotment too.
pub struct HouseService<H, B, A> {
  houses:     Arc<H>,
  buildings:  BuildingService<B>,
  allotments: AllotmentService<A, B>,
}

impl<H, B, A> Clone for HouseService<H, B, A> {
  fn clone(&self) -> Self {
    Self {
      houses:     Arc::clone(&self.houses),
      buildings:  self.buildings.clone(),
      allotments: self.allotments.clone(),
    }
  }
}

impl<H, B, A> HouseService<H, B, A>
where
  H: HouseStore,
  B: BuildingStore,
  A: AllotmentStore,
{
  pub fn new(
    houses: Arc<H>,
    buildings: BuildingService<B>,
    allotments: AllotmentService<A, B>,
  ) -> Self {
    Self { houses, buildings, allotments }
  }

  pub async fn get_all_houses(&self) -> Result<Vec<House>> {
    self.houses.select_all_houses().await.map_err(Error::store)
  }

  /// Single lookup; `None` when absent.
  pub async fn find_house(&self, id: i64) -> Result<Option<House>> {
    self.houses.select_house_by_id(id).await.map_err(Error::store)
  }

  /// Strict lookup. Confirms existence with one read, then reads the record
  /// again to return it.
  pub async fn get_house_by_id(&self, id: i64) -> Result<House> {
    self.ensure_house_exists(id).await?;
    self
      .find_house(id)
      .await?
      .ok_or_else(|| Error::not_found(EntityKind::House, id))
  }

  /// The allotment house `id` stands on.
  pub async fn get_allotment_of_house(&self, id: i64) -> Result<Allotment> {
    let house = self.get_house_by_id(id).await?;
    self.allotments.get_allotment_by_id(house.allotment_id).await
  }

  /// Persist `house` unless its allotment already carries a building.
  ///
  /// Nothing is written to the house port before the occupancy scan
  /// finishes. The id the store assigns is not returned.
  pub async fn create_house(&self, house: House) -> Result<()> {
    let buildings = self.buildings.get_all_buildings().await?;
    ensure_allotment_vacant(&buildings, house.allotment_id)?;

    tracing::debug!(
      house_id = house.house_id,
      allotment_id = house.allotment_id,
      "creating house"
    );
    self.houses.create_house(house).await.map_err(Error::store)?;
    Ok(())
  }

  /// Replace every field of house `id` with `house`.
  pub async fn update_house(&self, id: i64, house: House) -> Result<()> {
    self.ensure_house_exists(id).await?;
    self.houses.update_house(id, house).await.map_err(Error::store)?;
    Ok(())
  }

  pub async fn delete_house(&self, id: i64) -> Result<()> {
    self.ensure_house_exists(id).await?;
    tracing::debug!(house_id = id, "deleting house");
    self.houses.delete_house(id).await.map_err(Error::store)?;
    Ok(())
  }

  async fn ensure_house_exists(&self, id: i64) -> Result<()> {
    match self.find_house(id).await? {
      Some(_) => Ok(()),
      None => Err(Error::not_found(EntityKind::House, id)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    building::Building,
    services::fakes::{Call, FakeStore},
  };

  type Service =
    HouseService<FakeStore<House>, FakeStore<Building>, FakeStore<Allotment>>;

  struct Harness {
    houses:     Arc<FakeStore<House>>,
    buildings:  Arc<FakeStore<Building>>,
    allotments: Arc<FakeStore<Allotment>>,
    service:    Service,
  }

  fn harness(houses: Vec<House>, buildings: Vec<Building>) -> Harness {
    let houses = Arc::new(FakeStore::with_rows(houses));
    let buildings = Arc::new(FakeStore::with_rows(buildings));
    let allotments = Arc::new(FakeStore::with_rows(vec![
      Allotment::new(1, "1 High Street", 300),
      Allotment::new(2, "2 High Street", 300),
      Allotment::new(3, "3 High Street", 300),
    ]));
    let building_service = BuildingService::new(buildings.clone());
    let service = HouseService::new(
      houses.clone(),
      building_service.clone(),
      AllotmentService::new(allotments.clone(), building_service),
    );
    Harness { houses, buildings, allotments, service }
  }

  fn two_houses() -> Vec<House> {
    vec![House::new(1, "HouseOne", 5, 1), House::new(2, "HouseTwo", 6, 2)]
  }

  fn two_buildings() -> Vec<Building> {
    two_houses().into_iter().map(Building::from).collect()
  }

  // ── Reads ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_all_houses_returns_store_contents() {
    let h = harness(two_houses(), vec![]);

    let actual = h.service.get_all_houses().await.unwrap();

    assert_eq!(actual, two_houses());
    assert_eq!(h.houses.calls(), vec![Call::SelectAll]);
  }

  #[tokio::test]
  async fn get_house_by_id_fails_if_house_does_not_exist() {
    let h = harness(vec![], vec![]);

    let err = h.service.get_house_by_id(1).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "House with id 1 doesn't exist!");
    assert_eq!(h.houses.calls(), vec![Call::SelectById(1)]);
  }

  #[tokio::test]
  async fn get_house_by_id_reads_twice_when_house_exists() {
    let h = harness(vec![House::new(1, "HouseOne", 5, 1)], vec![]);

    let actual = h.service.get_house_by_id(1).await.unwrap();

    assert_eq!(actual, House::new(1, "HouseOne", 5, 1));
    assert_eq!(
      h.houses.calls(),
      vec![Call::SelectById(1), Call::SelectById(1)]
    );
  }

  #[tokio::test]
  async fn find_house_returns_none_for_unknown_id() {
    let h = harness(two_houses(), vec![]);
    assert_eq!(h.service.find_house(42).await.unwrap(), None);
    assert_eq!(h.houses.calls(), vec![Call::SelectById(42)]);
  }

  #[tokio::test]
  async fn get_allotment_of_house_follows_reference() {
    let h = harness(two_houses(), vec![]);

    let allotment = h.service.get_allotment_of_house(2).await.unwrap();

    assert_eq!(allotment, Allotment::new(2, "2 High Street", 300));
    assert_eq!(h.allotments.calls(), vec![Call::SelectById(2)]);
  }

  // ── Create ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_house_fails_if_allotment_taken_by_first_building() {
    let h = harness(vec![], two_buildings());

    let err = h
      .service
      .create_house(House::new(3, "HouseThree", 5, 1))
      .await
      .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(err.to_string(), "Allotment 1 already has a building on it");
    assert_eq!(h.buildings.calls(), vec![Call::SelectAll]);
    assert!(h.houses.calls().is_empty());
  }

  #[tokio::test]
  async fn create_house_fails_if_allotment_taken_by_second_building() {
    let h = harness(vec![], two_buildings());

    let err = h
      .service
      .create_house(House::new(3, "HouseThree", 6, 2))
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Allotment 2 already has a building on it");
    assert_eq!(h.buildings.calls(), vec![Call::SelectAll]);
    assert!(h.houses.calls().is_empty());
  }

  #[tokio::test]
  async fn create_house_passes_house_down_if_allotment_is_free() {
    let h = harness(vec![], two_buildings());

    h.service
      .create_house(House::new(3, "HouseOne", 5, 3))
      .await
      .unwrap();

    assert_eq!(
      h.houses.calls(),
      vec![Call::Create(House::new(3, "HouseOne", 5, 3))]
    );
    assert_eq!(h.buildings.calls(), vec![Call::SelectAll]);
  }

  #[tokio::test]
  async fn create_house_is_blocked_by_a_workplace() {
    use crate::building::BuildingKind;

    let forge = Building::new(7, "Forge", BuildingKind::Workplace, 2, 3);
    let h = harness(vec![], vec![forge]);

    let err = h
      .service
      .create_house(House::new(0, "Lodge", 4, 3))
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Allotment 3 already has a building on it");
    assert!(h.houses.calls().is_empty());
  }

  // ── Delete ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_house_fails_if_id_does_not_exist() {
    let h = harness(vec![], vec![]);

    let err = h.service.delete_house(1).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "House with id 1 doesn't exist!");
    assert_eq!(h.houses.calls(), vec![Call::SelectById(1)]);
  }

  #[tokio::test]
  async fn delete_house_passes_id_down_if_it_exists() {
    let h = harness(vec![House::new(1, "HouseOne", 5, 3)], vec![]);

    h.service.delete_house(1).await.unwrap();

    assert_eq!(
      h.houses.calls(),
      vec![Call::SelectById(1), Call::Delete(1)]
    );
  }

  #[tokio::test]
  async fn deleting_twice_fails_the_second_time() {
    let h = harness(vec![House::new(1, "HouseOne", 5, 3)], vec![]);

    h.service.delete_house(1).await.unwrap();
    let err = h.service.delete_house(1).await.unwrap_err();

    assert_eq!(err.to_string(), "House with id 1 doesn't exist!");
    assert_eq!(
      h.houses.calls(),
      vec![Call::SelectById(1), Call::Delete(1), Call::SelectById(1)]
    );
  }

  // ── Update ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_house_fails_if_house_does_not_exist() {
    let h = harness(vec![], vec![]);

    let err = h
      .service
      .update_house(1, House::new(1, "Renamed", 5, 1))
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "House with id 1 doesn't exist!");
    assert_eq!(h.houses.calls(), vec![Call::SelectById(1)]);
  }

  #[tokio::test]
  async fn update_house_replaces_every_field() {
    let h = harness(two_houses(), vec![]);
    let replacement = House::new(2, "HouseTwoAndAHalf", 9, 2);

    h.service.update_house(2, replacement.clone()).await.unwrap();

    assert_eq!(
      h.houses.calls(),
      vec![Call::SelectById(2), Call::Update(2, replacement.clone())]
    );
    assert_eq!(h.houses.rows()[1], replacement);
  }
}
