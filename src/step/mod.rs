//! STEP physical file (ISO 10303-21) reader for IFC models.
//!
//! This module provides:
//! - [`StepModel`] - parsed file with lookup by id and type
//! - [`Entity`] / [`Record`] - entity instances, simple or complex
//! - [`Value`] - instance parameters
//! - [`Header`] - HEADER section summary
//! - [`schema`] - attribute layouts for IFC spatial types

mod entity;
mod header;
mod model;
mod model_impl;
mod parser;
pub mod schema;
pub mod text;
mod value;

pub use entity::{Entity, Record};
pub use header::Header;
pub use model::StepModel;
pub use parser::{parse, ExchangeFile};
pub use value::Value;
