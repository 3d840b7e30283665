//! Core layer - the model contract consumed by level extraction.
//!
//! - [`ModelReader`] - query elements by type tag
//! - [`ElementReader`] - per-element attribute access

mod traits;

pub use traits::{ElementReader, ModelReader};

/// Type tag of building storey elements.
pub const BUILDING_STOREY: &str = "IFCBUILDINGSTOREY";
