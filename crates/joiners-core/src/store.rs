//! The `JoinerStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `joiners-store-sqlite`). It is deliberately dumb: no validation and no
//! uniqueness policy live here, only persistence. [`crate::JoinerGateway`]
//! layers the business rules on top.

use std::future::Future;

use uuid::Uuid;

use crate::{
  joiner::{CreateJoiner, Joiner},
  page::{Page, Pagination},
};

/// Abstraction over a joiner store backend.
///
/// Backend errors must convert into [`crate::Error`]; a backend that
/// enforces uniqueness itself reports a rejected write as
/// [`crate::Error::DuplicateIdentifier`] through that conversion.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait JoinerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  /// Persist a new joiner. The store assigns `id`, `created_at` and
  /// `updated_at`; the input is stored as given.
  fn insert_joiner(
    &self,
    input: CreateJoiner,
  ) -> impl Future<Output = Result<Joiner, Self::Error>> + Send + '_;

  /// Retrieve a joiner by id. Returns `None` if not found.
  fn get_joiner(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Joiner>, Self::Error>> + Send + '_;

  /// Whether any joiner other than `exclude` holds `identification_number`.
  fn identification_taken(
    &self,
    identification_number: i64,
    exclude: Option<Uuid>,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of the stored record with `joiner`'s and
  /// bump `updated_at`. Returns the record as stored.
  fn replace_joiner(
    &self,
    joiner: Joiner,
  ) -> impl Future<Output = Result<Joiner, Self::Error>> + Send + '_;

  /// List joiners in creation order.
  fn list_joiners(
    &self,
    pagination: Pagination,
  ) -> impl Future<Output = Result<Page<Joiner>, Self::Error>> + Send + '_;
}
