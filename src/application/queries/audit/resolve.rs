// src/application/queries/audit/resolve.rs
use crate::{
    application::ports::RelationSourcePort,
    domain::{
        errors::{DomainError, DomainResult},
        tracked::{policy::RelationPath, related::RelatedEntity},
    },
};
use serde_json::Value;
use std::sync::Arc;

/// Resolves a raw stored value into its display form by walking a
/// relation mean from the tracked record.
///
/// The first path segment is a relation hop through the host; every
/// further segment except the last is a nested relation on the reached
/// entity. The final segment is an attribute: when the entity exposes a
/// `ValueTransformer` supporting it, the raw stored value is passed
/// through the transform; otherwise the attribute is read directly off
/// the entity currently sitting behind the relation. A hop that does
/// not resolve is a `Resolution` error, raised at read time only; the
/// stored raw value stays retrievable from the row itself.
pub(super) async fn resolve_display_value(
    record_type: &str,
    record_id: i64,
    path: &RelationPath,
    raw: Value,
    relations: &RelationSourcePort,
) -> DomainResult<Value> {
    let mut entity: Arc<dyn RelatedEntity> = relations
        .follow(record_type, record_id, path.relation())
        .await?
        .ok_or_else(|| missing_relation(record_type, record_id, path.relation()))?;

    for segment in path.intermediates() {
        entity = entity
            .related(segment)
            .ok_or_else(|| missing_relation(record_type, record_id, segment))?;
    }

    let attribute = path.attribute();
    if let Some(transformer) = entity.transformer() {
        if transformer.supports(attribute) {
            return Ok(transformer.transform(attribute, raw));
        }
    }

    entity.attribute(attribute).ok_or_else(|| {
        DomainError::Resolution(format!(
            "attribute '{attribute}' is not present on the entity reached from \
             {record_type}#{record_id}"
        ))
    })
}

fn missing_relation(record_type: &str, record_id: i64, relation: &str) -> DomainError {
    DomainError::Resolution(format!(
        "relation '{relation}' did not resolve from {record_type}#{record_id}"
    ))
}
