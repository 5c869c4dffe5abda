//! Reference data seeding.
//!
//! Departments and recruiters are never written through the API, so the
//! store is populated once at startup, either from a JSON file or from the
//! built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Department row without an id; ids are assigned in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDepartment {
    pub name: String,
    pub code: String,
}

/// Recruiter row without an id; ids are assigned in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecruiter {
    pub name: String,
    pub email: String,
}

/// Reference data loaded into a fresh store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub departments: Vec<SeedDepartment>,
    #[serde(default)]
    pub recruiters: Vec<SeedRecruiter>,
}

impl SeedData {
    /// Built-in reference data used when no seed file is configured.
    pub fn defaults() -> Self {
        let departments = [
            ("Engineering", "ENG"),
            ("Marketing", "MKT"),
            ("Sales", "SAL"),
            ("Human Resources", "HR"),
        ]
        .into_iter()
        .map(|(name, code)| SeedDepartment {
            name: name.to_string(),
            code: code.to_string(),
        })
        .collect();

        let recruiters = [
            ("Juan Perez", "jperez@company.com"),
            ("Maria Garcia", "mgarcia@company.com"),
            ("Carlos Rodriguez", "crodriguez@company.com"),
        ]
        .into_iter()
        .map(|(name, email)| SeedRecruiter {
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect();

        Self {
            departments,
            recruiters,
        }
    }

    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let seed: Self = serde_json::from_str(json)?;
        seed.check()?;
        Ok(seed)
    }

    /// Load seed data from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let seed = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            departments = seed.departments.len(),
            recruiters = seed.recruiters.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    fn check(&self) -> StoreResult<()> {
        if let Some(d) = self
            .departments
            .iter()
            .find(|d| d.name.trim().is_empty() || d.code.trim().is_empty())
        {
            return Err(StoreError::seed(format!(
                "department requires a name and code: {:?}",
                d
            )));
        }
        if let Some(r) = self
            .recruiters
            .iter()
            .find(|r| r.name.trim().is_empty() || r.email.trim().is_empty())
        {
            return Err(StoreError::seed(format!(
                "recruiter requires a name and email: {:?}",
                r
            )));
        }
        Ok(())
    }
}
