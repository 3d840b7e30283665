//! # Storey Levels
//!
//! Derives per-storey elevations, section-cut heights and a camera
//! distance estimate from IFC building models.
//!
//! ## Modules
//!
//! - [`util`] - Errors
//! - [`step`] - STEP physical file (ISO 10303-21) reader
//! - [`core`] - Model and element traits
//! - [`levels`] - Elevation extraction and height transforms
//!
//! ## Example
//!
//! ```ignore
//! use storey_levels::levels;
//!
//! for height in levels::from_file("tower.ifc")? {
//!     println!("{}", height);
//! }
//! ```

pub mod util;
pub mod step;
pub mod core;
pub mod levels;

// Re-export commonly used types
pub use util::{Error, Result};
pub use step::StepModel;
pub use crate::core::{ElementReader, ModelReader, BUILDING_STOREY};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result};
    pub use crate::step::{StepModel, Value};
    pub use crate::core::{ElementReader, ModelReader, BUILDING_STOREY};
    pub use crate::levels::*;
}
