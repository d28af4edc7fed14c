// src/application/commands/audit/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ActorProviderPort, ClockPort, SchemaIntrospectorPort},
    domain::audit::repository::AuditRecordRepository,
};

/// Drives the audit side of a save: field selection, change detection,
/// and one repository insert per changed field.
pub struct AuditRecorder {
    pub(super) repo: Arc<dyn AuditRecordRepository>,
    pub(super) schema: Arc<SchemaIntrospectorPort>,
    pub(super) actors: Arc<ActorProviderPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl AuditRecorder {
    pub fn new(
        repo: Arc<dyn AuditRecordRepository>,
        schema: Arc<SchemaIntrospectorPort>,
        actors: Arc<ActorProviderPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            schema,
            actors,
            clock,
        }
    }
}
