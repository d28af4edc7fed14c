// src/application/queries/audit/display.rs
use super::{AuditQueryService, resolve::resolve_display_value};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{audit::entity::AuditRecord, tracked::related::RelatedEntity},
};
use serde_json::Value;
use std::sync::Arc;

impl AuditQueryService {
    /// The human-readable name for the row's field: the policy's
    /// display label when configured, the raw field key otherwise.
    pub fn field_display_name<'a>(&'a self, record: &'a AuditRecord) -> &'a str {
        match self.policies.get(&record.record_type) {
            Some(policy) => record.display_name(policy),
            None => &record.field_key,
        }
    }

    pub async fn old_display_value(&self, record: &AuditRecord) -> ApplicationResult<Value> {
        self.display_value(record, record.old_value.clone()).await
    }

    pub async fn new_display_value(&self, record: &AuditRecord) -> ApplicationResult<Value> {
        self.display_value(record, record.new_value.clone()).await
    }

    /// The actor entity behind the row's stamped id, when one was
    /// authenticated at write time and the host still knows it.
    pub async fn actor(
        &self,
        record: &AuditRecord,
    ) -> ApplicationResult<Option<Arc<dyn RelatedEntity>>> {
        match record.actor_id {
            Some(id) => self
                .actors
                .find(id)
                .await
                .map_err(ApplicationError::from),
            None => Ok(None),
        }
    }

    async fn display_value(
        &self,
        record: &AuditRecord,
        raw: Value,
    ) -> ApplicationResult<Value> {
        let Some(path) = self
            .policies
            .get(&record.record_type)
            .and_then(|policy| policy.relation_mean(&record.field_key))
        else {
            return Ok(raw);
        };
        resolve_display_value(
            &record.record_type,
            record.record_id,
            path,
            raw,
            self.relations.as_ref(),
        )
        .await
        .map_err(ApplicationError::from)
    }
}
