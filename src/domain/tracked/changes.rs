// src/domain/tracked/changes.rs
use crate::domain::tracked::record::TrackedRecord;
use serde_json::Value;

/// One detected field mutation: the raw pre- and post-save values.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field_key: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// Compares a record's original and current values for each selected
/// field, in the order the fields were selected.
///
/// A field absent from either value map is skipped; a freshly created
/// record has no originals, so creates detect nothing. Equality is
/// `serde_json::Value` equality, so `null`, `""` and `0` stay distinct.
pub fn detect_changes(record: &dyn TrackedRecord, fields: &[String]) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    for field in fields {
        if !record.is_dirty(field) {
            continue;
        }
        let (Some(old_value), Some(new_value)) =
            (record.original_value(field), record.current_value(field))
        else {
            continue;
        };
        if old_value == new_value {
            continue;
        }
        changes.push(FieldChange {
            field_key: field.clone(),
            old_value,
            new_value,
        });
    }
    changes
}
