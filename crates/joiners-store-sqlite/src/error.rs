//! Error type for `joiners-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored column holds a value outside its declared set.
  #[error("unknown {column} value in store: {value:?}")]
  UnknownValue { column: &'static str, value: String },

  /// The `UNIQUE` constraint on `identification_number` rejected a write.
  #[error("identification number {0} is already taken")]
  DuplicateIdentification(i64),

  #[error("joiner not found: {0}")]
  JoinerNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for joiners_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::DuplicateIdentification(n) => Self::DuplicateIdentifier(n),
      Error::JoinerNotFound(id) => Self::NotFound(id),
      other => Self::store(other),
    }
  }
}
