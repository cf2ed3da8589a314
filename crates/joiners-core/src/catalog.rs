//! Fixed value sets for the enumerated joiner fields.
//!
//! Each set is a closed enum; the validator and the data model both read the
//! allowed values from [`VariantArray::VARIANTS`], so there is exactly one
//! definition per set and it cannot change at runtime.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Role the joiner is hired into.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
  VariantArray,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
  Sc,
  En,
  Se,
  St,
}

/// Primary technology stack.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
  VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stack {
  Net,
  Java,
  Python,
  Node,
}

/// CEFR english level.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
  VariantArray,
)]
pub enum EnglishLevel {
  A1,
  A2,
  B1,
  B2,
  C1,
  C2,
}

/// Prior experience in the client's business domain.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
  VariantArray,
)]
pub enum DomainExperience {
  Low,
  Medium,
  Advanced,
}

/// Render the allowed values of a set as `[A, B, C]` for error messages.
pub fn allowed_values<T>() -> String
where
  T: VariantArray + Into<&'static str> + Copy,
{
  let names: Vec<&'static str> =
    T::VARIANTS.iter().map(|v| (*v).into()).collect();
  format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
  use std::str::FromStr as _;

  use super::*;

  #[test]
  fn wire_names_match_declared_sets() {
    assert_eq!(allowed_values::<Role>(), "[SC, EN, SE, ST]");
    assert_eq!(allowed_values::<Stack>(), "[net, java, python, node]");
    assert_eq!(
      allowed_values::<EnglishLevel>(),
      "[A1, A2, B1, B2, C1, C2]"
    );
    assert_eq!(
      allowed_values::<DomainExperience>(),
      "[Low, Medium, Advanced]"
    );
  }

  #[test]
  fn parsing_is_case_sensitive() {
    assert_eq!(Role::from_str("EN").unwrap(), Role::En);
    assert!(Role::from_str("en").is_err());
    assert_eq!(Stack::from_str("net").unwrap(), Stack::Net);
    assert!(Stack::from_str("NET").is_err());
    assert!(DomainExperience::from_str("advanced").is_err());
  }

  #[test]
  fn serde_uses_the_same_names_as_strum() {
    for role in Role::VARIANTS {
      let json = serde_json::to_value(role).unwrap();
      assert_eq!(json, serde_json::Value::from(role.to_string()));
    }
    for stack in Stack::VARIANTS {
      let json = serde_json::to_value(stack).unwrap();
      assert_eq!(json, serde_json::Value::from(stack.to_string()));
    }
  }
}
