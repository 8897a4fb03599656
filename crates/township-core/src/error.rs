//! Error types for `township-core`.

use std::fmt;

use thiserror::Error;

/// The entity a [`Error::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Allotment,
  Building,
  Citizen,
  House,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Allotment => "Allotment",
      Self::Building => "Building",
      Self::Citizen => "Citizen",
      Self::House => "House",
    })
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("{entity} with id {id} doesn't exist!")]
  NotFound { entity: EntityKind, id: i64 },

  #[error("Allotment {0} already has a building on it")]
  AllotmentOccupied(i64),

  /// A persistence failure, passed through with its original message.
  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn not_found(entity: EntityKind, id: i64) -> Self {
    Self::NotFound { entity, id }
  }

  /// Box a backend error. Used as `.map_err(Error::store)` on port calls.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }

  pub fn is_conflict(&self) -> bool { matches!(self, Self::AllotmentOccupied(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
