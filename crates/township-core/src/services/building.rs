use std::sync::Arc;

use crate::{
  EntityKind, Error, Result,
  building::Building,
  store::BuildingStore,
};

/// Fail with [`Error::AllotmentOccupied`] if any of `buildings` stands on
/// `allotment_id`.
///
/// Scans in iteration order and reports the first match. Callers read the
/// building list and insert in two separate steps, so two concurrent creates
/// on the same allotment can both pass this check.
pub fn ensure_allotment_vacant(buildings: &[Building], allotment_id: i64) -> Result<()> {
  match buildings.iter().find(|b| b.allotment_id == allotment_id) {
    Some(occupant) => {
      tracing::warn!(
        allotment_id,
        occupant_id = occupant.building_id,
        "allotment already has a building on it"
      );
      Err(Error::AllotmentOccupied(occupant.allotment_id))
    }
    None => Ok(()),
  }
}

/// Operations over every building, whatever its kind.
pub struct BuildingService<B> {
  buildings: Arc<B>,
}

impl<B> Clone for BuildingService<B> {
  fn clone(&self) -> Self { Self { buildings: Arc::clone(&self.buildings) } }
}

impl<B: BuildingStore> BuildingService<B> {
  pub fn new(buildings: Arc<B>) -> Self { Self { buildings } }

  pub async fn get_all_buildings(&self) -> Result<Vec<Building>> {
    self.buildings.select_all_buildings().await.map_err(Error::store)
  }

  pub async fn find_building(&self, id: i64) -> Result<Option<Building>> {
    self.buildings.select_building_by_id(id).await.map_err(Error::store)
  }

  pub async fn get_building_by_id(&self, id: i64) -> Result<Building> {
    self
      .find_building(id)
      .await?
      .ok_or_else(|| Error::not_found(EntityKind::Building, id))
  }

  pub async fn create_building(&self, building: Building) -> Result<()> {
    let existing = self.get_all_buildings().await?;
    ensure_allotment_vacant(&existing, building.allotment_id)?;

    tracing::debug!(
      building_id = building.building_id,
      allotment_id = building.allotment_id,
      "creating building"
    );
    self.buildings.create_building(building).await.map_err(Error::store)?;
    Ok(())
  }

  /// Replace every field of building `id` with `building`.
  pub async fn update_building(&self, id: i64, building: Building) -> Result<()> {
    self.get_building_by_id(id).await?;
    self.buildings.update_building(id, building).await.map_err(Error::store)?;
    Ok(())
  }

  pub async fn delete_building(&self, id: i64) -> Result<()> {
    self.get_building_by_id(id).await?;
    tracing::debug!(building_id = id, "deleting building");
    self.buildings.delete_building(id).await.map_err(Error::store)?;
    Ok(())
  }
}
