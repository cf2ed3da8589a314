//! Error types for `joiners-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("identification number {0} is already taken")]
  DuplicateIdentifier(i64),

  #[error("joiner not found: {0}")]
  NotFound(Uuid),

  /// Any failure inside a storage backend that is not one of the kinds
  /// above.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap an arbitrary backend error.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
