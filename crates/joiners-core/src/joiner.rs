//! The joiner record and its write-side inputs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::{DomainExperience, EnglishLevel, Role, Stack};

// ─── Joiner ──────────────────────────────────────────────────────────────────

/// A new hire, as owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joiner {
  /// Store-assigned; never changes after creation.
  pub id:                    Uuid,
  /// Externally assigned, unique across all joiners.
  pub identification_number: i64,
  /// Always uppercase.
  pub name:                  String,
  /// Always uppercase.
  pub last_name:             String,
  pub role:                  Role,
  pub stack:                 Stack,
  pub english_level:         EnglishLevel,
  pub domain_experience:     DomainExperience,
  pub created_at:            DateTime<Utc>,
  pub updated_at:            DateTime<Utc>,
}

impl Joiner {
  /// Shallow-merge `patch` onto this record. Omitted fields keep their
  /// current values; provided names are normalised.
  ///
  /// Timestamps are left untouched; the store sets `updated_at` on write.
  pub fn apply(&mut self, patch: JoinerPatch) {
    let JoinerPatch {
      identification_number,
      name,
      last_name,
      role,
      stack,
      english_level,
      domain_experience,
    } = patch;

    if let Some(n) = identification_number {
      self.identification_number = n;
    }
    if let Some(n) = name {
      self.name = normalize_name(&n);
    }
    if let Some(n) = last_name {
      self.last_name = normalize_name(&n);
    }
    if let Some(r) = role {
      self.role = r;
    }
    if let Some(s) = stack {
      self.stack = s;
    }
    if let Some(l) = english_level {
      self.english_level = l;
    }
    if let Some(d) = domain_experience {
      self.domain_experience = d;
    }
  }
}

// ─── CreateJoiner ────────────────────────────────────────────────────────────

/// Validated input for [`crate::JoinerGateway::create`]. `id` and the
/// timestamps are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJoiner {
  pub identification_number: i64,
  pub name:                  String,
  pub last_name:             String,
  pub role:                  Role,
  pub stack:                 Stack,
  pub english_level:         EnglishLevel,
  pub domain_experience:     DomainExperience,
}

impl CreateJoiner {
  /// Return a copy with the name fields normalised.
  pub fn normalized(self) -> Self {
    Self {
      name: normalize_name(&self.name),
      last_name: normalize_name(&self.last_name),
      ..self
    }
  }
}

// ─── JoinerPatch ─────────────────────────────────────────────────────────────

/// Validated partial update. At least one field is set when produced by
/// [`crate::validate::update_joiner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinerPatch {
  pub identification_number: Option<i64>,
  pub name:                  Option<String>,
  pub last_name:             Option<String>,
  pub role:                  Option<Role>,
  pub stack:                 Option<Stack>,
  pub english_level:         Option<EnglishLevel>,
  pub domain_experience:     Option<DomainExperience>,
}

impl JoinerPatch {
  pub fn is_empty(&self) -> bool { *self == Self::default() }
}

/// Names are stored trimmed and uppercased.
pub fn normalize_name(raw: &str) -> String { raw.trim().to_uppercase() }
