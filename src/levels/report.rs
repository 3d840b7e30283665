//! Serializable summary of everything derived from one model.

use serde::Serialize;

use super::extract::{extract_storeys, Storey};
use super::transform::{apply_offset, estimate_camera_z};
use crate::core::ModelReader;
use crate::util::Result;

/// Storeys, section-cut heights and camera framing for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLevels {
    pub storeys: Vec<Storey>,
    pub offset_height: f64,
    /// `storeys[i].elevation + offset_height`, same order
    pub section_heights: Vec<f64>,
    pub screen_size_co: f64,
    pub camera_z: f64,
}

impl SectionLevels {
    /// Extract storeys from `model` and derive all heights.
    pub fn from_model(model: &dyn ModelReader, offset_height: f64, screen_size_co: f64) -> Result<Self> {
        Ok(Self::from_storeys(extract_storeys(model)?, offset_height, screen_size_co))
    }

    pub fn from_storeys(storeys: Vec<Storey>, offset_height: f64, screen_size_co: f64) -> Self {
        let elevations: Vec<f64> = storeys.iter().map(|s| s.elevation).collect();
        Self {
            section_heights: apply_offset(&elevations, offset_height),
            camera_z: estimate_camera_z(&elevations, screen_size_co),
            storeys,
            offset_height,
            screen_size_co,
        }
    }

    pub fn elevations(&self) -> Vec<f64> {
        self.storeys.iter().map(|s| s.elevation).collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storeys.is_empty()
    }
}
