//! Data Models
//!
//! Configuration and resolution outcome types.

pub mod resolution;
pub mod settings;

pub use resolution::*;
pub use settings::*;
