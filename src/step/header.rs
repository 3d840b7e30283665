//! HEADER section of a STEP file.

use serde::Serialize;

use super::entity::Record;
use super::value::Value;

/// The parts of the HEADER section worth keeping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    /// `FILE_DESCRIPTION` description strings (view definitions for IFC)
    pub description: Vec<String>,
    /// `FILE_NAME` name attribute
    pub name: Option<String>,
    /// `FILE_NAME` originating system
    pub originating_system: Option<String>,
    /// `FILE_SCHEMA` identifiers, e.g. `IFC2X3` or `IFC4`
    pub schema: Vec<String>,
}

impl Header {
    /// Build from the records found between `HEADER;` and `ENDSEC;`.
    /// Unknown records are ignored.
    pub fn from_records(records: &[Record]) -> Self {
        let mut header = Header::default();
        for record in records {
            match record.name.as_str() {
                "FILE_DESCRIPTION" => header.description = strings(record.args.first()),
                "FILE_NAME" => {
                    header.name = non_empty(record.args.first());
                    header.originating_system = non_empty(record.args.get(5));
                }
                "FILE_SCHEMA" => header.schema = strings(record.args.first()),
                other => tracing::trace!("skipping header record {}", other),
            }
        }
        header
    }

    /// First schema identifier, if any.
    pub fn primary_schema(&self) -> Option<&str> {
        self.schema.first().map(String::as_str)
    }
}

fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_list)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records() {
        let records = vec![
            Record {
                name: "FILE_NAME".into(),
                args: vec![
                    Value::String("house.ifc".into()),
                    Value::String("2024".into()),
                    Value::List(vec![]),
                    Value::List(vec![]),
                    Value::String(String::new()),
                    Value::String("Modeller 7".into()),
                    Value::String(String::new()),
                ],
            },
            Record {
                name: "FILE_SCHEMA".into(),
                args: vec![Value::List(vec![Value::String("IFC4".into())])],
            },
        ];
        let header = Header::from_records(&records);
        assert_eq!(header.name.as_deref(), Some("house.ifc"));
        assert_eq!(header.originating_system.as_deref(), Some("Modeller 7"));
        assert_eq!(header.primary_schema(), Some("IFC4"));
        assert!(header.description.is_empty());
    }
}
