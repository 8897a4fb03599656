use std::sync::Arc;

use crate::{
  EntityKind, Error, Result,
  citizen::Citizen,
  store::CitizenStore,
};

pub struct CitizenService<C> {
  citizens: Arc<C>,
}

impl<C> Clone for CitizenService<C> {
  fn clone(&self) -> Self { Self { citizens: Arc::clone(&self.citizens) } }
}

impl<C: CitizenStore> CitizenService<C> {
  pub fn new(citizens: Arc<C>) -> Self { Self { citizens } }

  pub async fn get_all_citizens(&self) -> Result<Vec<Citizen>> {
    self.citizens.select_all_citizens().await.map_err(Error::store)
  }

  /// Citizens living in house `house_id`.
  pub async fn get_citizens_of_house(&self, house_id: i64) -> Result<Vec<Citizen>> {
    let mut citizens = self.get_all_citizens().await?;
    citizens.retain(|c| c.house_id == Some(house_id));
    Ok(citizens)
  }

  /// Citizens working at building `workplace_id`.
  pub async fn get_citizens_of_workplace(&self, workplace_id: i64) -> Result<Vec<Citizen>> {
    let mut citizens = self.get_all_citizens().await?;
    citizens.retain(|c| c.workplace_id == Some(workplace_id));
    Ok(citizens)
  }

  pub async fn find_citizen(&self, id: i64) -> Result<Option<Citizen>> {
    self.citizens.select_citizen_by_id(id).await.map_err(Error::store)
  }

  pub async fn get_citizen_by_id(&self, id: i64) -> Result<Citizen> {
    self
      .find_citizen(id)
      .await?
      .ok_or_else(|| Error::not_found(EntityKind::Citizen, id))
  }

  pub async fn insert_citizen(&self, citizen: Citizen) -> Result<()> {
    tracing::debug!(citizen_id = citizen.citizen_id, "inserting citizen");
    self.citizens.create_citizen(citizen).await.map_err(Error::store)?;
    Ok(())
  }

  /// Replace every field of citizen `id` with `citizen`.
  pub async fn update_citizen(&self, id: i64, citizen: Citizen) -> Result<()> {
    self.get_citizen_by_id(id).await?;
    self.citizens.update_citizen(id, citizen).await.map_err(Error::store)?;
    Ok(())
  }

  pub async fn delete_citizen(&self, id: i64) -> Result<()> {
    self.get_citizen_by_id(id).await?;
    tracing::debug!(citizen_id = id, "deleting citizen");
    self.citizens.delete_citizen(id).await.map_err(Error::store)?;
    Ok(())
  }
}
