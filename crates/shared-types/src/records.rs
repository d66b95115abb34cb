use serde::{Deserialize, Serialize};
use std::fmt;

/// A document as returned by the record store: field name to JSON value.
///
/// Nothing about its schema is assumed here. Callers that need a field
/// go through a narrow parse step such as [`SchoolCity::from_record`].
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Label used for schools that carry no usable `city` field.
pub const UNSPECIFIED_CITY: &str = "unspecified";

/// The named collections the dashboard reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Schools,
    Users,
    Agencies,
}

impl Collection {
    /// Name of the collection in the record store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Schools => "schools",
            Collection::Users => "users",
            Collection::Agencies => "agencies",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The grouping key extracted from a school record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolCity {
    Named(String),
    Unspecified,
}

impl SchoolCity {
    /// Read `city` from a school record. Only a string with visible
    /// characters counts; absent, blank and non-string values fall back to
    /// [`SchoolCity::Unspecified`].
    pub fn from_record(record: &RawRecord) -> Self {
        match record.get("city").and_then(|v| v.as_str()).map(str::trim) {
            Some(city) if !city.is_empty() => SchoolCity::Named(city.to_string()),
            _ => SchoolCity::Unspecified,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SchoolCity::Named(name) => name,
            SchoolCity::Unspecified => UNSPECIFIED_CITY,
        }
    }
}
