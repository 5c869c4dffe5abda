//! Business logic services.

pub mod position;

pub use position::PositionService;
