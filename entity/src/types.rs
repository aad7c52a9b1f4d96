//! Wrapper types for JSON-backed columns.
//!
//! The original schema stores list-shaped turf attributes (sports, facilities,
//! slot labels) as JSON. `FromJsonQueryResult` lets the entities expose them
//! as typed values instead of raw `serde_json::Value`.

use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered list of strings stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// List of entity ids stored as a JSON array, e.g. the turfs an owner manages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct UuidList(pub Vec<Uuid>);

impl UuidList {
    pub fn contains(&self, id: Uuid) -> bool {
        self.0.contains(&id)
    }
}

/// A turf's slot vocabulary: open day name (lowercase, e.g. `"monday"`) mapped
/// to the ordered slot labels bookable on that day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SlotCalendar(pub BTreeMap<String, Vec<String>>);

impl SlotCalendar {
    /// Returns the slot labels defined for the given day, if the turf opens
    /// on that day at all.
    pub fn slots_for(&self, day: &str) -> Option<&[String]> {
        self.0.get(day).map(|slots| slots.as_slice())
    }
}
