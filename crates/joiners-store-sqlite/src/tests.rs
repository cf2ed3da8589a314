//! Integration tests for `SqliteStore` against an in-memory database.

use std::sync::Arc;

use joiners_core::{
  JoinerGateway,
  catalog::{DomainExperience, EnglishLevel, Role, Stack},
  joiner::{CreateJoiner, JoinerPatch},
  page::Pagination,
  store::JoinerStore,
};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn input(identification_number: i64) -> CreateJoiner {
  CreateJoiner {
    identification_number,
    name: "FAKE NAME".into(),
    last_name: "FAKE LAST".into(),
    role: Role::En,
    stack: Stack::Net,
    english_level: EnglishLevel::B1,
    domain_experience: DomainExperience::Advanced,
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_joiner() {
  let s = store().await;

  let joiner = s.insert_joiner(input(2312321)).await.unwrap();
  assert_eq!(joiner.identification_number, 2312321);
  assert_eq!(joiner.created_at, joiner.updated_at);

  let fetched = s.get_joiner(joiner.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, joiner.id);
  assert_eq!(fetched.name, "FAKE NAME");
  assert_eq!(fetched.role, Role::En);
  assert_eq!(fetched.stack, Stack::Net);
  assert_eq!(fetched.english_level, EnglishLevel::B1);
  assert_eq!(fetched.domain_experience, DomainExperience::Advanced);
  assert_eq!(fetched.created_at, joiner.created_at);
}

#[tokio::test]
async fn get_joiner_missing_returns_none() {
  let s = store().await;
  let result = s.get_joiner(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn unique_constraint_rejects_second_insert() {
  let s = store().await;
  s.insert_joiner(input(7)).await.unwrap();

  let err = s.insert_joiner(input(7)).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateIdentification(7)));

  let page = s.list_joiners(Pagination::default()).await.unwrap();
  assert_eq!(page.total_results, 1);
}

#[tokio::test]
async fn constraint_rejection_maps_to_duplicate_identifier() {
  let s = store().await;
  s.insert_joiner(input(7)).await.unwrap();

  let err: joiners_core::Error = s.insert_joiner(input(7)).await.unwrap_err().into();
  assert!(matches!(err, joiners_core::Error::DuplicateIdentifier(7)));
}

// ─── Uniqueness lookups ──────────────────────────────────────────────────────

#[tokio::test]
async fn identification_taken_honours_exclusion() {
  let s = store().await;
  let one = s.insert_joiner(input(1)).await.unwrap();

  assert!(s.identification_taken(1, None).await.unwrap());
  assert!(!s.identification_taken(1, Some(one.id)).await.unwrap());
  assert!(s.identification_taken(1, Some(Uuid::new_v4())).await.unwrap());
  assert!(!s.identification_taken(2, None).await.unwrap());
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_fields_and_bumps_updated_at() {
  let s = store().await;
  let mut joiner = s.insert_joiner(input(1)).await.unwrap();
  let created_at = joiner.created_at;

  joiner.stack = Stack::Java;
  joiner.name = "OTHER".into();
  let stored = s.replace_joiner(joiner).await.unwrap();
  assert!(stored.updated_at >= created_at);

  let fetched = s.get_joiner(stored.id).await.unwrap().unwrap();
  assert_eq!(fetched.stack, Stack::Java);
  assert_eq!(fetched.name, "OTHER");
  assert_eq!(fetched.created_at, created_at);
  assert_eq!(fetched.updated_at, stored.updated_at);
}

#[tokio::test]
async fn replace_onto_taken_number_is_rejected() {
  let s = store().await;
  let mut one = s.insert_joiner(input(1)).await.unwrap();
  s.insert_joiner(input(2)).await.unwrap();

  one.identification_number = 2;
  let err = s.replace_joiner(one.clone()).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateIdentification(2)));

  let fetched = s.get_joiner(one.id).await.unwrap().unwrap();
  assert_eq!(fetched.identification_number, 1);
}

#[tokio::test]
async fn replace_missing_is_not_found() {
  let s = store().await;
  let mut ghost = s.insert_joiner(input(1)).await.unwrap();
  ghost.id = Uuid::new_v4();

  let err = s.replace_joiner(ghost).await.unwrap_err();
  assert!(matches!(err, Error::JoinerNotFound(_)));
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_paginated_in_creation_order() {
  let s = store().await;
  for n in 10..17 {
    s.insert_joiner(input(n)).await.unwrap();
  }

  let first = s.list_joiners(Pagination::new(Some(1), Some(3))).await.unwrap();
  assert_eq!(first.total_results, 7);
  assert_eq!(first.total_pages, 3);
  let numbers: Vec<i64> =
    first.results.iter().map(|j| j.identification_number).collect();
  assert_eq!(numbers, vec![10, 11, 12]);

  let last = s.list_joiners(Pagination::new(Some(3), Some(3))).await.unwrap();
  let numbers: Vec<i64> =
    last.results.iter().map(|j| j.identification_number).collect();
  assert_eq!(numbers, vec![16]);

  let beyond = s.list_joiners(Pagination::new(Some(9), Some(3))).await.unwrap();
  assert!(beyond.results.is_empty());
  assert_eq!(beyond.total_results, 7);
}

// ─── Through the gateway ─────────────────────────────────────────────────────

#[tokio::test]
async fn gateway_round_trip_on_sqlite() {
  let gw = JoinerGateway::new(Arc::new(store().await));

  let created = gw
    .create(CreateJoiner {
      name: "fake name".into(),
      last_name: "fake last".into(),
      ..input(2312321)
    })
    .await
    .unwrap();
  assert_eq!(created.name, "FAKE NAME");

  let dup = gw.create(input(2312321)).await.unwrap_err();
  assert!(matches!(dup, joiners_core::Error::DuplicateIdentifier(2312321)));

  let updated = gw
    .update_by_id(created.id, JoinerPatch {
      role: Some(Role::St),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(updated.role, Role::St);
  assert_eq!(gw.fetch_by_id(created.id).await.unwrap().role, Role::St);

  let missing = gw.fetch_by_id(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(missing, joiners_core::Error::NotFound(_)));
}
