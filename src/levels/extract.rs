//! Building storey elevation extraction.

use std::path::Path;

use serde::Serialize;

use crate::core::{ElementReader, ModelReader, BUILDING_STOREY};
use crate::step::StepModel;
use crate::util::{Error, Result};

/// A building storey with a validated elevation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Storey {
    /// Instance id of the storey element
    pub id: u64,
    pub name: Option<String>,
    /// Floor level in the model's length unit
    pub elevation: f64,
}

/// Read every building storey of the model, in model order.
///
/// A storey without a finite numeric elevation fails with
/// [`Error::MalformedElement`] naming its position and id.
#[tracing::instrument(skip_all)]
pub fn extract_storeys(model: &dyn ModelReader) -> Result<Vec<Storey>> {
    let elements = model.elements_of_type(BUILDING_STOREY);
    tracing::debug!("found {} building storeys", elements.len());

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| read_storey(index, element.as_ref()))
        .collect()
}

/// Elevations of all building storeys, in model order.
///
/// Duplicates and unsorted values are kept as found. A model without
/// storeys gives an empty vector.
pub fn extract_elevations(model: &dyn ModelReader) -> Result<Vec<f64>> {
    Ok(extract_storeys(model)?.into_iter().map(|s| s.elevation).collect())
}

/// Parse raw file contents and extract the storey elevations.
pub fn elevations_from_bytes(data: &[u8]) -> Result<Vec<f64>> {
    let model = StepModel::from_bytes(data)?;
    extract_elevations(&model)
}

/// Open an IFC file and extract the storey elevations.
pub fn elevations_from_file(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let model = StepModel::open(path)?;
    extract_elevations(&model)
}

fn read_storey(index: usize, element: &dyn ElementReader) -> Result<Storey> {
    let malformed = |reason: String| Error::MalformedElement {
        index,
        id: element.id(),
        reason,
    };

    let value = element
        .attribute("Elevation")
        .ok_or_else(|| malformed("elevation attribute is missing".into()))?;
    if value.is_null() {
        return Err(malformed(format!("elevation is unset ({})", value)));
    }
    let elevation = value
        .as_f64()
        .ok_or_else(|| malformed(format!("elevation is {} {}, not a number", value.kind(), value)))?;
    if !elevation.is_finite() {
        return Err(malformed(format!("elevation {} is not finite", elevation)));
    }

    let storey = Storey {
        id: element.id(),
        name: element.name().map(str::to_string),
        elevation,
    };
    tracing::trace!("storey #{} {:?} at {}", storey.id, storey.name, storey.elevation);
    Ok(storey)
}
