use std::sync::Arc;

use crate::{
    application::ports::{ActorDirectoryPort, RelationSourcePort},
    domain::{audit::repository::AuditRecordRepository, tracked::policy::PolicyRegistry},
};

/// Read side of the audit trail: per-record history plus the lazy
/// display accessors (labels, relation means, actor lookup).
pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditRecordRepository>,
    pub(super) relations: Arc<RelationSourcePort>,
    pub(super) actors: Arc<ActorDirectoryPort>,
    pub(super) policies: Arc<PolicyRegistry>,
}

impl AuditQueryService {
    pub fn new(
        repo: Arc<dyn AuditRecordRepository>,
        relations: Arc<RelationSourcePort>,
        actors: Arc<ActorDirectoryPort>,
        policies: Arc<PolicyRegistry>,
    ) -> Self {
        Self {
            repo,
            relations,
            actors,
            policies,
        }
    }
}
