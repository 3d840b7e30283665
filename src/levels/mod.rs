//! Storey levels - elevations, section-cut heights and camera framing.
//!
//! The pipeline is model -> [`extract_elevations`] -> [`apply_offset`].
//! [`from_file`] and [`from_model`] run it with [`DEFAULT_OFFSET_HEIGHT`];
//! call the steps directly to use another offset.

mod extract;
mod report;
mod transform;

use std::path::Path;

pub use extract::{
    elevations_from_bytes, elevations_from_file, extract_elevations, extract_storeys, Storey,
};
pub use report::SectionLevels;
pub use transform::{
    apply_offset, estimate_camera_z, estimate_camera_z_default, DEFAULT_OFFSET_HEIGHT,
    DEFAULT_SCREEN_SIZE_CO,
};

use crate::core::ModelReader;
use crate::util::Result;

/// Section-cut heights for every storey of an IFC file.
///
/// Missing files fail with [`crate::Error::FileNotFound`] and unreadable
/// contents with [`crate::Error::Parse`]; both are returned unchanged.
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let elevations = elevations_from_file(path)?;
    Ok(apply_offset(&elevations, DEFAULT_OFFSET_HEIGHT))
}

/// Section-cut heights for every storey of an already parsed model.
pub fn from_model(model: &dyn ModelReader) -> Result<Vec<f64>> {
    let elevations = extract_elevations(model)?;
    Ok(apply_offset(&elevations, DEFAULT_OFFSET_HEIGHT))
}
