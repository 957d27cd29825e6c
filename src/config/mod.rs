//! Configuration module for markveil
//!
//! This module defines the marker-visibility settings record and its
//! persistent storage: serialization/deserialization to/from JSON and
//! storage in a platform-specific directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
