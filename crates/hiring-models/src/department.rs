//! Department reference data.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Numeric department identifier, assigned by the store.
pub type DepartmentId = i64;

/// Organisational unit a position belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Short code, e.g. `ENG`
    pub code: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
        }
    }
}
