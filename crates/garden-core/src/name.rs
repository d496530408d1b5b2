//! Canonical display names for plants, gardens and owners.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GardenError;

/// A non-empty name with its first character upper-cased and the rest
/// lower-cased.
///
/// The newtype is only constructed through [`Name::canonical`], so holding
/// one proves the emptiness rule already passed. Deserialization goes
/// through it too. Which error kind an empty name maps to depends on the
/// owner (plant vs. garden), so that decision stays with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Canonicalize `raw`, or `None` if it is empty.
    #[must_use]
    pub fn canonical(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let first = chars.next()?;
        let name = first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect();
        Some(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = GardenError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::canonical(&raw)
            .ok_or_else(|| GardenError::garden("Registry Error: Name cannot be empty."))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
