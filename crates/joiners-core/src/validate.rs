//! Request validation for the joiner resource.
//!
//! Every function here takes untyped input straight off the wire and either
//! returns a typed value or a [`ValidationError`] listing *all* offending
//! fields. Nothing in this module touches the store.
//!
//! Unknown body fields are ignored. Messages follow the
//! `"<field>" <problem>` convention so clients can show them verbatim.

use std::{fmt, str::FromStr};

use serde::Serialize;
use serde_json::{Map, Value};
use strum::VariantArray;
use thiserror::Error;
use uuid::Uuid;

use crate::{
  catalog::{DomainExperience, EnglishLevel, Role, Stack, allowed_values},
  joiner::{CreateJoiner, JoinerPatch},
};

/// Body fields recognised on create and update.
pub const JOINER_FIELDS: [&str; 7] = [
  "identification_number",
  "name",
  "last_name",
  "role",
  "stack",
  "english_level",
  "domain_experience",
];

/// Name under which the path identifier is reported.
pub const ID_FIELD: &str = "id";

// ─── Error ───────────────────────────────────────────────────────────────────

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field:   String,
  pub message: String,
}

impl Violation {
  fn new(field: &str, problem: impl fmt::Display) -> Self {
    Self { field: field.to_owned(), message: format!("\"{field}\" {problem}") }
  }
}

/// Malformed client input. Raised before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.violations))]
pub struct ValidationError {
  pub violations: Vec<Violation>,
}

#[cfg(test)]
impl ValidationError {
  /// Whether `field` is among the violations.
  pub fn mentions(&self, field: &str) -> bool {
    self.violations.iter().any(|v| v.field == field)
  }
}

fn summarize(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(|v| v.message.as_str())
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Validate a create body: every field is required.
pub fn create_joiner(body: &Value) -> Result<CreateJoiner, ValidationError> {
  let mut check = Checker::default();
  let Some(map) = check.object(body) else {
    return Err(check.finish_err());
  };

  let identification_number = check.integer(map, "identification_number", true);
  let name = check.text(map, "name", true);
  let last_name = check.text(map, "last_name", true);
  let role = check.one_of::<Role>(map, "role", true);
  let stack = check.one_of::<Stack>(map, "stack", true);
  let english_level = check.one_of::<EnglishLevel>(map, "english_level", true);
  let domain_experience =
    check.one_of::<DomainExperience>(map, "domain_experience", true);

  match (
    identification_number,
    name,
    last_name,
    role,
    stack,
    english_level,
    domain_experience,
  ) {
    (
      Some(identification_number),
      Some(name),
      Some(last_name),
      Some(role),
      Some(stack),
      Some(english_level),
      Some(domain_experience),
    ) => Ok(CreateJoiner {
      identification_number,
      name,
      last_name,
      role,
      stack,
      english_level,
      domain_experience,
    }),
    _ => Err(check.finish_err()),
  }
}

/// Validate an update body: every field is optional, but at least one
/// recognised field must be present.
pub fn update_joiner(body: &Value) -> Result<JoinerPatch, ValidationError> {
  let mut check = Checker::default();
  let patch = check.patch(body);
  check.finish(patch)
}

/// Validate a path identifier.
pub fn joiner_id(raw: &str) -> Result<Uuid, ValidationError> {
  let mut check = Checker::default();
  let id = check.id(raw);
  check.finish(id)
}

/// Validate the path identifier and the body of an update together, so that
/// both sets of problems are reported at once.
pub fn update_request(
  raw_id: &str,
  body: &Value,
) -> Result<(Uuid, JoinerPatch), ValidationError> {
  let mut check = Checker::default();
  let id = check.id(raw_id);
  let patch = check.patch(body);
  check.finish((id, patch))
}

// ─── Checker ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Checker {
  violations: Vec<Violation>,
}

impl Checker {
  fn fail(&mut self, field: &str, problem: impl fmt::Display) {
    self.violations.push(Violation::new(field, problem));
  }

  fn is_clean(&self) -> bool { self.violations.is_empty() }

  fn finish<T>(self, value: T) -> Result<T, ValidationError> {
    if self.is_clean() { Ok(value) } else { Err(self.finish_err()) }
  }

  fn finish_err(self) -> ValidationError {
    ValidationError { violations: self.violations }
  }

  fn object<'v>(&mut self, body: &'v Value) -> Option<&'v Map<String, Value>> {
    let map = body.as_object();
    if map.is_none() {
      self.fail("value", "must be of type object");
    }
    map
  }

  fn id(&mut self, raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or_else(|_| {
      self.fail(ID_FIELD, "must be a valid joiner id");
      Uuid::nil()
    })
  }

  fn patch(&mut self, body: &Value) -> JoinerPatch {
    let Some(map) = self.object(body) else {
      return JoinerPatch::default();
    };

    if !JOINER_FIELDS.iter().any(|f| map.contains_key(*f)) {
      self.fail("value", "must have at least 1 key");
      return JoinerPatch::default();
    }

    JoinerPatch {
      identification_number: self.integer(map, "identification_number", false),
      name:                  self.text(map, "name", false),
      last_name:             self.text(map, "last_name", false),
      role:                  self.one_of(map, "role", false),
      stack:                 self.one_of(map, "stack", false),
      english_level:         self.one_of(map, "english_level", false),
      domain_experience:     self.one_of(map, "domain_experience", false),
    }
  }

  /// Look up `field`, recording a violation if it is required and absent.
  fn field<'v>(
    &mut self,
    map: &'v Map<String, Value>,
    field: &str,
    required: bool,
  ) -> Option<&'v Value> {
    let value = map.get(field);
    if value.is_none() && required {
      self.fail(field, "is required");
    }
    value
  }

  /// A whole number, given as a JSON number or a numeric string.
  fn integer(
    &mut self,
    map: &Map<String, Value>,
    field: &str,
    required: bool,
  ) -> Option<i64> {
    let value = self.field(map, field, required)?;
    let number = match value {
      Value::Number(n) => n.as_f64(),
      Value::String(s) => s.trim().parse::<f64>().ok(),
      _ => None,
    }
    .filter(|f| f.is_finite());

    let Some(number) = number else {
      self.fail(field, "must be a number");
      return None;
    };
    if number.fract() != 0.0 {
      self.fail(field, "must be an integer");
      return None;
    }
    if number.abs() > MAX_SAFE_INTEGER {
      self.fail(field, "must be a safe number");
      return None;
    }
    Some(number as i64)
  }

  fn text(
    &mut self,
    map: &Map<String, Value>,
    field: &str,
    required: bool,
  ) -> Option<String> {
    match self.field(map, field, required)? {
      Value::String(s) if s.trim().is_empty() => {
        self.fail(field, "is not allowed to be empty");
        None
      }
      Value::String(s) => Some(s.clone()),
      _ => {
        self.fail(field, "must be a string");
        None
      }
    }
  }

  fn one_of<T>(
    &mut self,
    map: &Map<String, Value>,
    field: &str,
    required: bool,
  ) -> Option<T>
  where
    T: FromStr + VariantArray + Into<&'static str> + Copy,
  {
    let value = self.field(map, field, required)?;
    let parsed = value.as_str().and_then(|s| T::from_str(s).ok());
    if parsed.is_none() {
      self.fail(field, format!("must be one of {}", allowed_values::<T>()));
    }
    parsed
  }
}

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
