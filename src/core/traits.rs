//! Abstract traits for building models and their elements.
//!
//! These traits define the interface between a file-format reader
//! and the level extraction in [`crate::levels`].

use crate::step::{schema, Value};

// ============================================================================
// Model Traits
// ============================================================================

/// Read-only access to a parsed building model.
pub trait ModelReader: Send + Sync {
    /// All elements of the given type, in model order.
    /// Type tags compare ASCII case-insensitively.
    fn elements_of_type(&self, type_tag: &str) -> Vec<Box<dyn ElementReader + '_>>;

    /// Number of elements of the given type.
    fn count_of_type(&self, type_tag: &str) -> usize {
        self.elements_of_type(type_tag).len()
    }
}

// ============================================================================
// Element Traits
// ============================================================================

/// One element of a model.
pub trait ElementReader: Send + Sync {
    /// Instance identifier (`#id` in STEP files).
    fn id(&self) -> u64;

    /// Upper-cased type tag, e.g. `IFCBUILDINGSTOREY`.
    fn type_name(&self) -> &str;

    /// Positional attribute list.
    fn attributes(&self) -> &[Value];

    /// Attribute by schema name.
    ///
    /// Returns None when the type layout is unknown or the instance
    /// has fewer parameters than the layout expects.
    fn attribute(&self, name: &str) -> Option<&Value> {
        let index = schema::attribute_index(self.type_name(), name)?;
        self.attributes().get(index)
    }

    /// `Name` attribute as text, if set.
    fn name(&self) -> Option<&str> {
        self.attribute("Name").and_then(Value::as_str)
    }
}
