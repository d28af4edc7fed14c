// src/application/commands/audit/record_save.rs
use super::AuditRecorder;
use crate::{
    application::{
        dto::{FieldAuditFailure, SaveAuditReport},
        error::ApplicationResult,
    },
    domain::{
        audit::entity::AuditRecord,
        tracked::{
            changes::detect_changes, columns::select_fields, policy::AuditPolicy,
            record::TrackedRecord,
        },
    },
};

impl AuditRecorder {
    /// Audits one committed save. Runs strictly after the host's own
    /// transaction, so nothing here can roll the save back: a failed
    /// insert is logged and collected into the report while the
    /// remaining changed fields are still written.
    pub async fn record_save(
        &self,
        record: &dyn TrackedRecord,
        policy: &AuditPolicy,
    ) -> ApplicationResult<SaveAuditReport> {
        let schema_fields = self.schema.schema_fields(record.table()).await?;
        let fields = select_fields(&schema_fields, policy);
        let changes = detect_changes(record, &fields);
        if changes.is_empty() {
            tracing::debug!(
                record_type = record.record_type(),
                record_id = record.record_id(),
                "no audited fields changed"
            );
            return Ok(SaveAuditReport::default());
        }

        let actor_id = self.actors.current_actor_id();
        let mut report = SaveAuditReport::default();
        for change in changes {
            let row = AuditRecord {
                id: None,
                record_type: record.record_type().to_owned(),
                record_id: record.record_id(),
                actor_id,
                field_key: change.field_key.clone(),
                old_value: change.old_value,
                new_value: change.new_value,
                created_at: Some(self.clock.now()),
            };
            match self.repo.insert(row).await {
                Ok(written) => report.written.push(written.into()),
                Err(err) => {
                    tracing::warn!(
                        record_type = record.record_type(),
                        record_id = record.record_id(),
                        field = %change.field_key,
                        error = %err,
                        "audit write failed"
                    );
                    report.failures.push(FieldAuditFailure {
                        field_key: change.field_key,
                        message: err.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }
}
