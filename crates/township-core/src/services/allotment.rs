use std::{collections::HashSet, sync::Arc};

use crate::{
  EntityKind, Error, Result,
  allotment::Allotment,
  services::BuildingService,
  store::{AllotmentStore, BuildingStore},
};

pub struct AllotmentService<A, B> {
  allotments: Arc<A>,
  buildings:  BuildingService<B>,
}

impl<A, B> Clone for AllotmentService<A, B> {
  fn clone(&self) -> Self {
    Self {
      allotments: Arc::clone(&self.allotments),
      buildings:  self.buildings.clone(),
    }
  }
}

impl<A, B> AllotmentService<A, B>
where
  A: AllotmentStore,
  B: BuildingStore,
{
  pub fn new(allotments: Arc<A>, buildings: BuildingService<B>) -> Self {
    Self { allotments, buildings }
  }

  pub async fn get_all_allotments(&self) -> Result<Vec<Allotment>> {
    self.allotments.select_all_allotments().await.map_err(Error::store)
  }

  pub async fn find_allotment(&self, id: i64) -> Result<Option<Allotment>> {
    self.allotments.select_allotment_by_id(id).await.map_err(Error::store)
  }

  pub async fn get_allotment_by_id(&self, id: i64) -> Result<Allotment> {
    self
      .find_allotment(id)
      .await?
      .ok_or_else(|| Error::not_found(EntityKind::Allotment, id))
  }

  /// Allotments no building stands on, in store order.
  pub async fn get_vacant_allotments(&self) -> Result<Vec<Allotment>> {
    let occupied: HashSet<i64> = self
      .buildings
      .get_all_buildings()
      .await?
      .into_iter()
      .map(|b| b.allotment_id)
      .collect();

    let mut allotments = self.get_all_allotments().await?;
    allotments.retain(|a| !occupied.contains(&a.allotment_id));
    Ok(allotments)
  }

  pub async fn create_allotment(&self, allotment: Allotment) -> Result<()> {
    tracing::debug!(allotment_id = allotment.allotment_id, "creating allotment");
    self.allotments.create_allotment(allotment).await.map_err(Error::store)?;
    Ok(())
  }

  /// Replace every field of allotment `id` with `allotment`.
  pub async fn update_allotment(&self, id: i64, allotment: Allotment) -> Result<()> {
    self.get_allotment_by_id(id).await?;
    self
      .allotments
      .update_allotment(id, allotment)
      .await
      .map_err(Error::store)?;
    Ok(())
  }

  pub async fn delete_allotment(&self, id: i64) -> Result<()> {
    self.get_allotment_by_id(id).await?;
    tracing::debug!(allotment_id = id, "deleting allotment");
    self.allotments.delete_allotment(id).await.map_err(Error::store)?;
    Ok(())
  }
}
