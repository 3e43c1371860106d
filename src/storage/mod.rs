//! Storage Layer
//!
//! Handles persistence of the JSON configuration file.

pub mod config;

pub use config::*;
