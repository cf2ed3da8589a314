//! Handlers for `/joiner` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/joiner` | Body: all joiner fields; returns 201 + joiner |
//! | `GET`  | `/joiner` | Optional `?page` and `?limit`; returns a page of joiners |
//! | `GET`  | `/joiner/:id` | 400 if `id` is malformed, 404 if not found |
//! | `PUT`  | `/joiner/:id` | Body: at least one joiner field; returns the merged joiner |
//!
//! Bodies are taken as raw JSON and run through
//! [`joiners_core::validate`] before the gateway sees them, so a malformed
//! request never reaches the store.

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use joiners_core::{
  JoinerGateway,
  page::{Page, Pagination},
  store::JoinerStore,
  validate,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ApiError, view::JoinerView};

/// Unwrap a JSON body. Every rejection, including a missing
/// `Content-Type: application/json`, is reported as a 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
  body
    .map(|Json(v)| v)
    .map_err(|r| ApiError::Rejected(r.body_text()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /joiner` — returns 201 + the stored joiner.
pub async fn create<S>(
  State(gateway): State<JoinerGateway<S>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JoinerStore + 'static,
{
  let input = validate::create_joiner(&json_body(body)?)?;
  let joiner = gateway.create(input).await?;
  Ok((StatusCode::CREATED, Json(JoinerView::from(joiner))))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// 1-based page number. Defaults to 1.
  pub page:  Option<u32>,
  /// Page size. Defaults to 10, capped at 100.
  pub limit: Option<u32>,
}

/// `GET /joiner[?page=<n>][&limit=<n>]`
pub async fn list<S>(
  State(gateway): State<JoinerGateway<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page<JoinerView>>, ApiError>
where
  S: JoinerStore + 'static,
{
  let Query(params) = params.map_err(|r| ApiError::Rejected(r.body_text()))?;
  let page = gateway
    .list(Pagination::new(params.page, params.limit))
    .await?;
  Ok(Json(page.map(JoinerView::from)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /joiner/:id`
pub async fn get_one<S>(
  State(gateway): State<JoinerGateway<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<JoinerView>, ApiError>
where
  S: JoinerStore + 'static,
{
  let id = validate::joiner_id(&raw_id)?;
  let joiner = gateway.fetch_by_id(id).await?;
  Ok(Json(JoinerView::from(joiner)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /joiner/:id` — partial update; omitted fields keep their values.
pub async fn update<S>(
  State(gateway): State<JoinerGateway<S>>,
  Path(raw_id): Path<String>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<JoinerView>, ApiError>
where
  S: JoinerStore + 'static,
{
  let (id, patch) = validate::update_request(&raw_id, &json_body(body)?)?;
  let joiner = gateway.update_by_id(id, patch).await?;
  Ok(Json(JoinerView::from(joiner)))
}
