use crate::domain::audit::entity::AuditRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecordDto {
    pub id: i64,
    pub record_type: String,
    pub record_id: i64,
    pub actor_id: Option<i64>,
    pub field_key: String,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<AuditRecord> for AuditRecordDto {
    fn from(record: AuditRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            record_type: record.record_type,
            record_id: record.record_id,
            actor_id: record.actor_id.map(Into::into),
            field_key: record.field_key,
            old_value: record.old_value,
            new_value: record.new_value,
            created_at: record.created_at,
        }
    }
}

/// One field whose audit row could not be written; the save itself had
/// already committed, so failures are reported rather than raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAuditFailure {
    pub field_key: String,
    pub message: String,
}

/// Outcome of auditing one save: the rows written plus any per-field
/// write failures. Both empty when nothing changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveAuditReport {
    pub written: Vec<AuditRecordDto>,
    pub failures: Vec<FieldAuditFailure>,
}

impl SaveAuditReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
