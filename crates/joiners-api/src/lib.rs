//! JSON REST API for the joiners service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`joiners_core::store::JoinerStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/v1", joiners_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod joiners;
pub mod view;

use std::sync::Arc;

use axum::{Router, routing::get};
use joiners_core::{JoinerGateway, store::JoinerStore};

pub use error::ApiError;
pub use view::JoinerView;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: JoinerStore + 'static,
{
  Router::new()
    .route("/joiner", get(joiners::list::<S>).post(joiners::create::<S>))
    .route(
      "/joiner/{id}",
      get(joiners::get_one::<S>).put(joiners::update::<S>),
    )
    .with_state(JoinerGateway::new(store))
}
