//! Core trait implementations backed by the STEP model.

use super::entity::Record;
use super::model::StepModel;
use super::value::Value;
use crate::core::{ElementReader, ModelReader};

impl ModelReader for StepModel {
    fn elements_of_type(&self, type_tag: &str) -> Vec<Box<dyn ElementReader + '_>> {
        self.records_of_type(type_tag)
            .map(|(id, record)| Box::new(RecordView { id, record }) as Box<dyn ElementReader + '_>)
            .collect()
    }

    fn count_of_type(&self, type_tag: &str) -> usize {
        self.records_of_type(type_tag).count()
    }
}

/// One record of an instance, seen as an element of its own type.
///
/// For a complex instance `#1=(A()B(..))` querying `B` yields a view
/// over the `B` record, so attribute positions follow `B`'s layout.
struct RecordView<'a> {
    id: u64,
    record: &'a Record,
}

impl ElementReader for RecordView<'_> {
    fn id(&self) -> u64 {
        self.id
    }

    fn type_name(&self) -> &str {
        &self.record.name
    }

    fn attributes(&self) -> &[Value] {
        &self.record.args
    }
}
