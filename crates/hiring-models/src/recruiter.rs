//! Recruiter reference data.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Numeric recruiter identifier, assigned by the store.
pub type RecruiterId = i64;

/// Person responsible for filling a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recruiter {
    pub id: RecruiterId,
    pub name: String,
    /// Contact email
    pub email: String,
}

impl Recruiter {
    pub fn new(id: RecruiterId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
