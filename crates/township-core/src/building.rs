//! Buildings and their House variant.
//!
//! Every structure in the town is a [`Building`] sitting on an allotment.
//! A [`House`] is the residential kind; it is stored in the same table and
//! converts to and from the supertype.

use serde::{Deserialize, Serialize};

// ─── Kind ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
  House,
  Workplace,
}

// ─── Building ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
  #[serde(default)]
  pub building_id:  i64,
  pub name:         String,
  pub kind:         BuildingKind,
  /// Maximum number of residents (houses) or workers (workplaces).
  pub capacity:     u32,
  pub allotment_id: i64,
}

impl Building {
  pub fn new(
    building_id: i64,
    name: impl Into<String>,
    kind: BuildingKind,
    capacity: u32,
    allotment_id: i64,
  ) -> Self {
    Self { building_id, name: name.into(), kind, capacity, allotment_id }
  }

  /// Narrow to a [`House`]; `None` for any other kind.
  pub fn into_house(self) -> Option<House> {
    match self.kind {
      BuildingKind::House => Some(House {
        house_id:     self.building_id,
        name:         self.name,
        capacity:     self.capacity,
        allotment_id: self.allotment_id,
      }),
      BuildingKind::Workplace => None,
    }
  }
}

// ─── House ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
  #[serde(default)]
  pub house_id:     i64,
  pub name:         String,
  /// Maximum number of residents.
  pub capacity:     u32,
  pub allotment_id: i64,
}

impl House {
  pub fn new(
    house_id: i64,
    name: impl Into<String>,
    capacity: u32,
    allotment_id: i64,
  ) -> Self {
    Self { house_id, name: name.into(), capacity, allotment_id }
  }
}

impl From<House> for Building {
  fn from(h: House) -> Self {
    Building {
      building_id:  h.house_id,
      name:         h.name,
      kind:         BuildingKind::House,
      capacity:     h.capacity,
      allotment_id: h.allotment_id,
    }
  }
}
