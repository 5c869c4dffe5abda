//! Persistence gateway.
//!
//! This crate provides:
//! - One repository trait per entity (departments, recruiters, positions)
//! - An in-memory store implementing all three, with generated ids
//! - Sorted, paginated position scans
//! - Reference data seeding from JSON
//! - Operation metrics

pub mod error;
pub mod memory;
pub mod metrics;
pub mod repos;
pub mod seed;
pub mod sorting;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use repos::{DepartmentRepository, PositionRepository, RecruiterRepository};
pub use seed::SeedData;
