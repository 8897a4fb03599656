//! Citizen: a resident who may live in a house and work in a workplace.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
  #[serde(default)]
  pub citizen_id:   i64,
  pub name:         String,
  /// The house this citizen lives in, if any.
  #[serde(default)]
  pub house_id:     Option<i64>,
  /// The building this citizen works at, if any.
  #[serde(default)]
  pub workplace_id: Option<i64>,
}

impl Citizen {
  pub fn new(
    citizen_id: i64,
    name: impl Into<String>,
    house_id: Option<i64>,
    workplace_id: Option<i64>,
  ) -> Self {
    Self { citizen_id, name: name.into(), house_id, workplace_id }
  }
}
