//! Position models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::department::{Department, DepartmentId};
use crate::recruiter::{Recruiter, RecruiterId};
use crate::validation::{
    require_text, ValidationError, ValidationResult, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};

/// Numeric position identifier, assigned by the store on first save.
pub type PositionId = i64;

/// Position status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// Not yet published
    #[default]
    Draft,
    /// Accepting candidates
    Open,
    /// No longer accepting candidates
    Closed,
    /// Kept for history only
    Archived,
}

impl PositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionStatus::Draft => "DRAFT",
            PositionStatus::Open => "OPEN",
            PositionStatus::Closed => "CLOSED",
            PositionStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job opening with its recruiter and department attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Store-generated id; `None` only before the first save
    pub id: Option<PositionId>,

    pub title: String,

    pub description: String,

    pub location: String,

    pub status: PositionStatus,

    /// Resolved recruiter record
    pub recruiter: Recruiter,

    /// Resolved department record
    pub department: Department,

    /// Budget amount, always greater than zero. Written as a JSON number
    /// carrying every submitted digit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schemars(with = "f64")]
    pub budget: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<NaiveDate>,
}

impl Position {
    /// Build a position from validated fields and resolved references.
    ///
    /// The returned position has no id; the store assigns one on save
    /// unless the caller sets it for a replacement.
    pub fn from_valid(valid: ValidPosition, recruiter: Recruiter, department: Department) -> Self {
        Self {
            id: None,
            title: valid.title,
            description: valid.description,
            location: valid.location,
            status: valid.status,
            recruiter,
            department,
            budget: valid.budget,
            closing_date: valid.closing_date,
        }
    }

    /// Set the identity used for a full replacement.
    pub fn with_id(mut self, id: PositionId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Reference to another entity by id.
///
/// Any other fields sent alongside the id are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntityRef {
    #[serde(default)]
    pub id: Option<i64>,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// Position body accepted by create and update.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionPayload {
    /// Ignored: create assigns a new id and update uses the path id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PositionId>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub status: Option<PositionStatus>,

    #[serde(default)]
    pub recruiter: Option<EntityRef>,

    #[serde(default)]
    pub department: Option<EntityRef>,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schemars(with = "Option<f64>")]
    pub budget: Option<Decimal>,

    #[serde(default)]
    pub closing_date: Option<NaiveDate>,
}

/// Payload fields that passed every guard.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPosition {
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: PositionStatus,
    pub recruiter_id: RecruiterId,
    pub department_id: DepartmentId,
    pub budget: Decimal,
    pub closing_date: Option<NaiveDate>,
}

impl PositionPayload {
    /// Run the field guards in declaration order.
    pub fn validate(&self) -> ValidationResult<ValidPosition> {
        let title = require_text("title", self.title.as_deref(), Some(MAX_TITLE_LENGTH))?;
        let description = require_text(
            "description",
            self.description.as_deref(),
            Some(MAX_DESCRIPTION_LENGTH),
        )?;
        let location = require_text("location", self.location.as_deref(), None)?;
        let status = self.status.ok_or(ValidationError::Missing("status"))?;

        let recruiter_id = self
            .recruiter
            .as_ref()
            .and_then(|r| r.id)
            .ok_or(ValidationError::Missing("recruiter"))?;
        let department_id = self
            .department
            .as_ref()
            .and_then(|d| d.id)
            .ok_or(ValidationError::Missing("department"))?;

        let budget = self.budget.ok_or(ValidationError::Missing("budget"))?;
        if budget <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBudget);
        }

        Ok(ValidPosition {
            title,
            description,
            location,
            status,
            recruiter_id,
            department_id,
            budget,
            closing_date: self.closing_date,
        })
    }
}
