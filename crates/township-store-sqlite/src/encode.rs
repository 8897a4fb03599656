//! Conversions between domain records and SQLite rows.
//!
//! Ids are plain `INTEGER PRIMARY KEY` rowids. A record id of `0` is bound as
//! NULL so SQLite assigns the next rowid.

use township_core::{
  allotment::Allotment,
  building::{Building, BuildingKind, House},
  citizen::Citizen,
};

use crate::{Error, Result};

// ─── Ids ─────────────────────────────────────────────────────────────────────

pub fn encode_id(id: i64) -> Option<i64> { (id != 0).then_some(id) }

// ─── BuildingKind ────────────────────────────────────────────────────────────

pub const HOUSE_KIND: &str = "house";

pub fn encode_building_kind(k: BuildingKind) -> &'static str {
  match k {
    BuildingKind::House => HOUSE_KIND,
    BuildingKind::Workplace => "workplace",
  }
}

pub fn decode_building_kind(s: &str) -> Result<BuildingKind> {
  match s {
    HOUSE_KIND => Ok(BuildingKind::House),
    "workplace" => Ok(BuildingKind::Workplace),
    other => Err(Error::UnknownBuildingKind(other.to_owned())),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const ALLOTMENT_COLUMNS: &str = "allotment_id, address, area";
pub const BUILDING_COLUMNS: &str = "building_id, name, kind, capacity, allotment_id";
pub const HOUSE_COLUMNS: &str = "building_id, name, capacity, allotment_id";
pub const CITIZEN_COLUMNS: &str = "citizen_id, name, house_id, workplace_id";

pub fn allotment_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Allotment> {
  Ok(Allotment {
    allotment_id: row.get(0)?,
    address:      row.get(1)?,
    area:         row.get(2)?,
  })
}

pub fn house_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<House> {
  Ok(House {
    house_id:     row.get(0)?,
    name:         row.get(1)?,
    capacity:     row.get(2)?,
    allotment_id: row.get(3)?,
  })
}

pub fn citizen_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Citizen> {
  Ok(Citizen {
    citizen_id:   row.get(0)?,
    name:         row.get(1)?,
    house_id:     row.get(2)?,
    workplace_id: row.get(3)?,
  })
}

/// A `buildings` row with its kind still undecoded.
pub struct RawBuilding {
  pub building_id:  i64,
  pub name:         String,
  pub kind:         String,
  pub capacity:     u32,
  pub allotment_id: i64,
}

impl RawBuilding {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      building_id:  row.get(0)?,
      name:         row.get(1)?,
      kind:         row.get(2)?,
      capacity:     row.get(3)?,
      allotment_id: row.get(4)?,
    })
  }

  pub fn into_building(self) -> Result<Building> {
    Ok(Building {
      building_id:  self.building_id,
      name:         self.name,
      kind:         decode_building_kind(&self.kind)?,
      capacity:     self.capacity,
      allotment_id: self.allotment_id,
    })
  }
}
