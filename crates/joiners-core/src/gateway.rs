//! [`JoinerGateway`]: the business rules between the validator and a store.
//!
//! The gateway is the only component that mutates joiners. It owns the
//! identification-number uniqueness check and the update merge; the store
//! underneath only persists. The check-then-write sequence is not atomic, so
//! backends are expected to also enforce uniqueness at the storage layer.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
  Error, Result,
  joiner::{CreateJoiner, Joiner, JoinerPatch},
  page::{Page, Pagination},
  store::JoinerStore,
};

/// Create/fetch/update operations over any [`JoinerStore`].
///
/// Cloning is cheap; the store is reference-counted and never cached.
pub struct JoinerGateway<S> {
  store: Arc<S>,
}

impl<S> Clone for JoinerGateway<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: JoinerStore> JoinerGateway<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  #[cfg(test)]
  fn store(&self) -> &Arc<S> { &self.store }

  /// Persist a new joiner with normalised names.
  ///
  /// Fails with [`Error::DuplicateIdentifier`] if any joiner already holds
  /// the identification number.
  pub async fn create(&self, input: CreateJoiner) -> Result<Joiner> {
    let input = input.normalized();
    self.ensure_available(input.identification_number, None).await?;

    let joiner = self
      .store
      .insert_joiner(input)
      .await
      .map_err(Into::<Error>::into)?;
    info!(
      joiner_id = %joiner.id,
      identification_number = joiner.identification_number,
      "joiner created"
    );
    Ok(joiner)
  }

  /// Look a joiner up by id. No side effects.
  pub async fn fetch_by_id(&self, id: Uuid) -> Result<Joiner> {
    self
      .store
      .get_joiner(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::NotFound(id))
  }

  /// Merge `patch` onto the stored joiner and persist the result.
  ///
  /// Fails with [`Error::NotFound`] if `id` does not exist, and with
  /// [`Error::DuplicateIdentifier`] if the patch moves the identification
  /// number onto one held by a *different* joiner. Keeping the current
  /// number is always allowed.
  pub async fn update_by_id(&self, id: Uuid, patch: JoinerPatch) -> Result<Joiner> {
    let mut joiner = self.fetch_by_id(id).await?;

    if let Some(number) = patch.identification_number {
      self.ensure_available(number, Some(id)).await?;
    }

    joiner.apply(patch);
    let joiner = self
      .store
      .replace_joiner(joiner)
      .await
      .map_err(Into::<Error>::into)?;
    info!(joiner_id = %joiner.id, "joiner updated");
    Ok(joiner)
  }

  /// One page of joiners in creation order.
  pub async fn list(&self, pagination: Pagination) -> Result<Page<Joiner>> {
    self.store.list_joiners(pagination).await.map_err(Into::into)
  }

  async fn ensure_available(&self, number: i64, exclude: Option<Uuid>) -> Result<()> {
    let taken = self
      .store
      .identification_taken(number, exclude)
      .await
      .map_err(Into::<Error>::into)?;
    if taken {
      debug!(identification_number = number, "identification number already taken");
      return Err(Error::DuplicateIdentifier(number));
    }
    Ok(())
  }
}
