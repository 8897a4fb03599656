//! Allotment: a plot of land that at most one building may occupy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
  /// `0` on create means "let the store assign an id".
  #[serde(default)]
  pub allotment_id: i64,
  pub address:      String,
  /// Plot size in square metres.
  pub area:         u32,
}

impl Allotment {
  pub fn new(allotment_id: i64, address: impl Into<String>, area: u32) -> Self {
    Self { allotment_id, address: address.into(), area }
  }
}
