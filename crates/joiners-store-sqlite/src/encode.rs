//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. Enumerated fields are stored under their
//! wire names, so the database reads the same as the API.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use joiners_core::joiner::Joiner;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Enumerated fields ───────────────────────────────────────────────────────

pub fn encode_enum<T: Into<&'static str>>(value: T) -> &'static str {
  value.into()
}

pub fn decode_enum<T: FromStr>(column: &'static str, s: &str) -> Result<T> {
  T::from_str(s).map_err(|_| Error::UnknownValue {
    column,
    value: s.to_owned(),
  })
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that produces a [`RawJoiner`].
pub const JOINER_COLUMNS: &str = "joiner_id, identification_number, name, \
                                  last_name, role, stack, english_level, \
                                  domain_experience, created_at, updated_at";

/// Raw values read directly from a `joiners` row.
pub struct RawJoiner {
  pub joiner_id:             String,
  pub identification_number: i64,
  pub name:                  String,
  pub last_name:             String,
  pub role:                  String,
  pub stack:                 String,
  pub english_level:         String,
  pub domain_experience:     String,
  pub created_at:            String,
  pub updated_at:            String,
}

impl RawJoiner {
  /// Map a row selected with [`JOINER_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      joiner_id:             row.get(0)?,
      identification_number: row.get(1)?,
      name:                  row.get(2)?,
      last_name:             row.get(3)?,
      role:                  row.get(4)?,
      stack:                 row.get(5)?,
      english_level:         row.get(6)?,
      domain_experience:     row.get(7)?,
      created_at:            row.get(8)?,
      updated_at:            row.get(9)?,
    })
  }

  pub fn into_joiner(self) -> Result<Joiner> {
    Ok(Joiner {
      id:                    decode_uuid(&self.joiner_id)?,
      identification_number: self.identification_number,
      name:                  self.name,
      last_name:             self.last_name,
      role:                  decode_enum("role", &self.role)?,
      stack:                 decode_enum("stack", &self.stack)?,
      english_level:         decode_enum("english_level", &self.english_level)?,
      domain_experience:     decode_enum(
        "domain_experience",
        &self.domain_experience,
      )?,
      created_at:            decode_dt(&self.created_at)?,
      updated_at:            decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use joiners_core::catalog::{EnglishLevel, Role, Stack};

  use super::*;

  #[test]
  fn enums_round_trip_through_wire_names() {
    assert_eq!(encode_enum(Role::Se), "SE");
    assert_eq!(encode_enum(Stack::Python), "python");
    assert_eq!(decode_enum::<EnglishLevel>("english_level", "C1").unwrap(), EnglishLevel::C1);
  }

  #[test]
  fn unknown_enum_value_names_the_column() {
    let err = decode_enum::<Role>("role", "CTO").unwrap_err();
    assert_eq!(err.to_string(), "unknown role value in store: \"CTO\"");
  }
}
