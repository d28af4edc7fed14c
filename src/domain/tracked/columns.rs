// src/domain/tracked/columns.rs
use crate::domain::tracked::policy::{AuditPolicy, FieldSelection};

/// Computes the final set of fields to audit for one record type.
///
/// Output order is stable and is the order change detection iterates:
/// schema order under the wildcard selection, configured order under an
/// explicit list. Names in an explicit list that the schema does not
/// know are silently dropped, as are unknown exclusions: misconfigured
/// selections yield fewer audited fields, never an error. The policy's
/// update-timestamp field is removed unconditionally unless the policy
/// revises timestamps; include/exclude settings cannot override that.
pub fn select_fields(schema_fields: &[String], policy: &AuditPolicy) -> Vec<String> {
    let candidates: Vec<&str> = match policy.selection() {
        FieldSelection::All => schema_fields.iter().map(String::as_str).collect(),
        FieldSelection::Only(fields) => fields
            .iter()
            .map(String::as_str)
            .filter(|field| schema_fields.iter().any(|known| known.as_str() == *field))
            .collect(),
    };

    let timestamp_field = policy.timestamp_field_name();
    let mut selected: Vec<String> = Vec::with_capacity(candidates.len());
    for field in candidates {
        if selected.iter().any(|kept| kept.as_str() == field) {
            continue;
        }
        if policy.excluded_fields().iter().any(|excl| excl.as_str() == field) {
            continue;
        }
        if !policy.revises_timestamps() && field == timestamp_field {
            continue;
        }
        selected.push(field.to_owned());
    }
    selected
}
