//! Public projection of a [`Joiner`].
//!
//! Store bookkeeping (`created_at`, `updated_at`) is stripped; the field set
//! is the same for every endpoint.

use joiners_core::{
  catalog::{DomainExperience, EnglishLevel, Role, Stack},
  joiner::Joiner,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinerView {
  pub id:                    Uuid,
  pub name:                  String,
  pub last_name:             String,
  pub role:                  Role,
  pub stack:                 Stack,
  pub english_level:         EnglishLevel,
  pub domain_experience:     DomainExperience,
  pub identification_number: i64,
}

impl From<Joiner> for JoinerView {
  fn from(j: Joiner) -> Self {
    Self {
      id:                    j.id,
      name:                  j.name,
      last_name:             j.last_name,
      role:                  j.role,
      stack:                 j.stack,
      english_level:         j.english_level,
      domain_experience:     j.domain_experience,
      identification_number: j.identification_number,
    }
  }
}
