//! Strongly-typed identifiers used across the client.
//!
//! The backend keys every record with an integer primary key. Each kind of
//! record gets its own newtype so an animal id can never be sent where a meat
//! part id is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an animal (the parent category of meat parts).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(i64);

/// Identifier of a meat part (scoped to an animal).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeatPartId(i64);

/// Identifier of an inventory record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        /// Parses the `value` attribute of an `<option>` element.
        ///
        /// Surrounding whitespace is ignored; anything else that is not a
        /// decimal integer is rejected.
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {:?}: {}", $name, s, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(AnimalId, "AnimalId");
impl_int_newtype!(MeatPartId, "MeatPartId");
impl_int_newtype!(InventoryId, "InventoryId");
