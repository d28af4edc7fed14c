// src/application/commands/audit/hooks.rs
use super::AuditRecorder;
use crate::{
    application::{dto::SaveAuditReport, error::ApplicationResult},
    domain::tracked::{
        policy::PolicyRegistry,
        record::{SaveKind, TrackedRecord},
    },
};
use std::sync::Arc;

/// The single integration point with the host persistence framework.
///
/// The embedding application registers a policy per record type at
/// startup and calls `after_save` from its post-save extension point,
/// after the save transaction has committed. Saves of unregistered
/// types and saves the policy's trigger filters out are no-ops.
pub struct AfterSaveHooks {
    recorder: Arc<AuditRecorder>,
    policies: Arc<PolicyRegistry>,
}

impl AfterSaveHooks {
    pub fn new(recorder: Arc<AuditRecorder>, policies: Arc<PolicyRegistry>) -> Self {
        Self { recorder, policies }
    }

    pub async fn after_save(
        &self,
        record: &dyn TrackedRecord,
        kind: SaveKind,
    ) -> ApplicationResult<SaveAuditReport> {
        let Some(policy) = self.policies.get(record.record_type()) else {
            tracing::debug!(
                record_type = record.record_type(),
                "no audit policy registered"
            );
            return Ok(SaveAuditReport::default());
        };
        if !policy.trigger().fires_on(kind) {
            return Ok(SaveAuditReport::default());
        }
        self.recorder.record_save(record, policy).await
    }
}
