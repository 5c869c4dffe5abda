//! Request handlers.

pub mod docs;
pub mod health;
pub mod positions;
pub mod reference;

pub use docs::*;
pub use health::*;
pub use positions::*;
pub use reference::*;
