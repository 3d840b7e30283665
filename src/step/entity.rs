//! Entity instances of the DATA section.

use smallvec::SmallVec;

use super::value::Value;

/// One partial entity value: a type name with its attribute list.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Upper-cased entity type name, e.g. `IFCBUILDINGSTOREY`
    pub name: String,
    pub args: Vec<Value>,
}

/// An entity instance (`#id = ...`).
///
/// Simple instances carry a single record. Complex (multi-leaf) instances
/// carry one record per partial type, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: u64,
    pub records: SmallVec<[Record; 1]>,
}

impl Entity {
    /// Type name of the first record.
    pub fn type_name(&self) -> &str {
        self.records.first().map(|r| r.name.as_str()).unwrap_or_default()
    }

    /// Attributes of the first record.
    pub fn args(&self) -> &[Value] {
        self.records.first().map(|r| r.args.as_slice()).unwrap_or_default()
    }
}
