//! Field kinds that carry a blur-time format check

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pattern::{is_valid_index_number, is_valid_phone, INDEX_NUMBER_PATTERN, PHONE_PATTERN};

/// Returned when a `name` attribute does not belong to a checked field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no format check registered for field '{0}'")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    IndexNumber,
    Phone,
}

impl FieldKind {
    /// Binding order used on page load.
    pub const ALL: [FieldKind; 2] = [FieldKind::IndexNumber, FieldKind::Phone];

    /// Default `name` attribute of the input element.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::IndexNumber => "index_number",
            FieldKind::Phone => "phone",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            FieldKind::IndexNumber => INDEX_NUMBER_PATTERN,
            FieldKind::Phone => PHONE_PATTERN,
        }
    }

    pub fn is_valid(self, value: &str) -> bool {
        match self {
            FieldKind::IndexNumber => is_valid_index_number(value),
            FieldKind::Phone => is_valid_phone(value),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
