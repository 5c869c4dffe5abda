//! Shared data models for the position manager.
//!
//! This crate provides Serde-serializable types for:
//! - Departments and recruiters (read-only reference data)
//! - Positions and the inbound position payload
//! - Validation guards run before anything is persisted
//! - The pagination and sort contract used by list endpoints

pub mod department;
pub mod page;
pub mod position;
pub mod recruiter;
pub mod validation;

// Re-export common types
pub use department::{Department, DepartmentId};
pub use page::{Page, PageRequest, PositionSortField, SortDirection};
pub use position::{EntityRef, Position, PositionId, PositionPayload, PositionStatus, ValidPosition};
pub use recruiter::{Recruiter, RecruiterId};
pub use validation::{ValidationError, ValidationResult};
