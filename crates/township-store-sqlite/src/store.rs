//! [`SqliteStore`]: the SQLite implementation of every Township port.

use std::path::Path;

use rusqlite::OptionalExtension as _;

use township_core::{
  allotment::Allotment,
  building::{Building, House},
  citizen::Citizen,
  store::{AllotmentStore, BuildingStore, CitizenStore, HouseStore},
};

use crate::{
  Result,
  encode::{
    ALLOTMENT_COLUMNS, BUILDING_COLUMNS, CITIZEN_COLUMNS, HOUSE_COLUMNS, HOUSE_KIND,
    RawBuilding, allotment_from_row, citizen_from_row, encode_building_kind, encode_id,
    house_from_row,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Township store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self.with_conn(|conn| conn.execute_batch(SCHEMA)).await
  }

  /// Run `f` on the connection thread.
  async fn with_conn<T, F>(&self, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<T> + Send + 'static,
  {
    Ok(self.conn.call(move |conn| Ok(f(conn)?)).await?)
  }

  async fn select_all<T, F>(&self, sql: String, map: F) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    self
      .with_conn(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], map)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
  }

  async fn select_by_id<T, F>(&self, sql: String, id: i64, map: F) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    self
      .with_conn(move |conn| conn.query_row(&sql, [id], map).optional())
      .await
  }

  async fn delete_by_id(&self, sql: &'static str, id: i64) -> Result<usize> {
    self.with_conn(move |conn| conn.execute(sql, [id])).await
  }
}

// ─── Allotments ──────────────────────────────────────────────────────────────

impl AllotmentStore for SqliteStore {
  type Error = crate::Error;

  async fn select_all_allotments(&self) -> Result<Vec<Allotment>> {
    self
      .select_all(
        format!("SELECT {ALLOTMENT_COLUMNS} FROM allotments ORDER BY allotment_id"),
        allotment_from_row,
      )
      .await
  }

  async fn select_allotment_by_id(&self, id: i64) -> Result<Option<Allotment>> {
    self
      .select_by_id(
        format!("SELECT {ALLOTMENT_COLUMNS} FROM allotments WHERE allotment_id = ?1"),
        id,
        allotment_from_row,
      )
      .await
  }

  async fn create_allotment(&self, allotment: Allotment) -> Result<i64> {
    let id = encode_id(allotment.allotment_id);
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO allotments (allotment_id, address, area) VALUES (?1, ?2, ?3)",
          rusqlite::params![id, allotment.address, allotment.area],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
  }

  async fn update_allotment(&self, id: i64, allotment: Allotment) -> Result<usize> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "UPDATE allotments SET address = ?2, area = ?3 WHERE allotment_id = ?1",
          rusqlite::params![id, allotment.address, allotment.area],
        )
      })
      .await
  }

  async fn delete_allotment(&self, id: i64) -> Result<usize> {
    self
      .delete_by_id("DELETE FROM allotments WHERE allotment_id = ?1", id)
      .await
  }
}

// ─── Buildings ───────────────────────────────────────────────────────────────

impl BuildingStore for SqliteStore {
  type Error = crate::Error;

  async fn select_all_buildings(&self) -> Result<Vec<Building>> {
    let raws = self
      .select_all(
        format!("SELECT {BUILDING_COLUMNS} FROM buildings ORDER BY building_id"),
        RawBuilding::from_row,
      )
      .await?;

    raws.into_iter().map(RawBuilding::into_building).collect()
  }

  async fn select_building_by_id(&self, id: i64) -> Result<Option<Building>> {
    let raw = self
      .select_by_id(
        format!("SELECT {BUILDING_COLUMNS} FROM buildings WHERE building_id = ?1"),
        id,
        RawBuilding::from_row,
      )
      .await?;

    raw.map(RawBuilding::into_building).transpose()
  }

  async fn create_building(&self, building: Building) -> Result<i64> {
    let id = encode_id(building.building_id);
    let kind = encode_building_kind(building.kind);
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO buildings (building_id, name, kind, capacity, allotment_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            id,
            building.name,
            kind,
            building.capacity,
            building.allotment_id,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
  }

  async fn update_building(&self, id: i64, building: Building) -> Result<usize> {
    let kind = encode_building_kind(building.kind);
    self
      .with_conn(move |conn| {
        conn.execute(
          "UPDATE buildings
           SET name = ?2, kind = ?3, capacity = ?4, allotment_id = ?5
           WHERE building_id = ?1",
          rusqlite::params![
            id,
            building.name,
            kind,
            building.capacity,
            building.allotment_id,
          ],
        )
      })
      .await
  }

  async fn delete_building(&self, id: i64) -> Result<usize> {
    self
      .delete_by_id("DELETE FROM buildings WHERE building_id = ?1", id)
      .await
  }
}

// ─── Houses ──────────────────────────────────────────────────────────────────
//
// Houses are the `kind = 'house'` rows of `buildings`. Every statement is
// scoped by kind so a workplace id never resolves as a house.

impl HouseStore for SqliteStore {
  type Error = crate::Error;

  async fn select_all_houses(&self) -> Result<Vec<House>> {
    self
      .select_all(
        format!(
          "SELECT {HOUSE_COLUMNS} FROM buildings
           WHERE kind = '{HOUSE_KIND}'
           ORDER BY building_id"
        ),
        house_from_row,
      )
      .await
  }

  async fn select_house_by_id(&self, id: i64) -> Result<Option<House>> {
    self
      .select_by_id(
        format!(
          "SELECT {HOUSE_COLUMNS} FROM buildings
           WHERE building_id = ?1 AND kind = '{HOUSE_KIND}'"
        ),
        id,
        house_from_row,
      )
      .await
  }

  async fn create_house(&self, house: House) -> Result<i64> {
    let id = encode_id(house.house_id);
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO buildings (building_id, name, kind, capacity, allotment_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id, house.name, HOUSE_KIND, house.capacity, house.allotment_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
  }

  async fn update_house(&self, id: i64, house: House) -> Result<usize> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "UPDATE buildings
           SET name = ?2, capacity = ?3, allotment_id = ?4
           WHERE building_id = ?1 AND kind = ?5",
          rusqlite::params![id, house.name, house.capacity, house.allotment_id, HOUSE_KIND],
        )
      })
      .await
  }

  async fn delete_house(&self, id: i64) -> Result<usize> {
    self
      .delete_by_id(
        "DELETE FROM buildings WHERE building_id = ?1 AND kind = 'house'",
        id,
      )
      .await
  }
}

// ─── Citizens ────────────────────────────────────────────────────────────────

impl CitizenStore for SqliteStore {
  type Error = crate::Error;

  async fn select_all_citizens(&self) -> Result<Vec<Citizen>> {
    self
      .select_all(
        format!("SELECT {CITIZEN_COLUMNS} FROM citizens ORDER BY citizen_id"),
        citizen_from_row,
      )
      .await
  }

  async fn select_citizen_by_id(&self, id: i64) -> Result<Option<Citizen>> {
    self
      .select_by_id(
        format!("SELECT {CITIZEN_COLUMNS} FROM citizens WHERE citizen_id = ?1"),
        id,
        citizen_from_row,
      )
      .await
  }

  async fn create_citizen(&self, citizen: Citizen) -> Result<i64> {
    let id = encode_id(citizen.citizen_id);
    self
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO citizens (citizen_id, name, house_id, workplace_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id, citizen.name, citizen.house_id, citizen.workplace_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
  }

  async fn update_citizen(&self, id: i64, citizen: Citizen) -> Result<usize> {
    self
      .with_conn(move |conn| {
        conn.execute(
          "UPDATE citizens SET name = ?2, house_id = ?3, workplace_id = ?4
           WHERE citizen_id = ?1",
          rusqlite::params![id, citizen.name, citizen.house_id, citizen.workplace_id],
        )
      })
      .await
  }

  async fn delete_citizen(&self, id: i64) -> Result<usize> {
    self
      .delete_by_id("DELETE FROM citizens WHERE citizen_id = ?1", id)
      .await
  }
}
