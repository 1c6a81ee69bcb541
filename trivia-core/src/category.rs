//! Category entity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable reference data seeded at startup; never created or deleted
/// through the API. Serializes to the wire shape `{id, type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Collapse categories into the wire dictionary shape `{id: type}`.
pub fn by_id(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
