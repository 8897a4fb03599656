//! Error type for `township-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A `buildings.kind` value this build does not know how to decode.
  #[error("unknown building kind: {0:?}")]
  UnknownBuildingKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
