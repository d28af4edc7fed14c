// src/domain/audit/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tracked::policy::AuditPolicy;
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub i64);

impl ActorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("actor id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActorId> for i64 {
    fn from(value: ActorId) -> Self {
        value.0
    }
}

/// One persisted old→new change entry for a single field of a single
/// tracked-record save. Append-only: never updated or merged after
/// creation. `id` and `created_at` are storage-assigned and absent
/// until the row is inserted.
///
/// The stored values are the raw ones captured at save time; anything
/// display-shaped (labels, relation means, transforms) is applied on
/// read so later configuration changes never rewrite history.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub id: Option<i64>,
    pub record_type: String,
    pub record_id: i64,
    pub actor_id: Option<ActorId>,
    pub field_key: String,
    pub old_value: Value,
    pub new_value: Value,
    pub created_at: Option<DateTime<Utc>>,
}

impl AuditRecord {
    /// The configured display label for this row's field, falling back
    /// to the raw field key.
    pub fn display_name<'a>(&'a self, policy: &'a AuditPolicy) -> &'a str {
        policy
            .display_label(&self.field_key)
            .unwrap_or(&self.field_key)
    }
}
