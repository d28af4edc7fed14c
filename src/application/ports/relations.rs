// src/application/ports/relations.rs
use crate::domain::errors::DomainResult;
use crate::domain::tracked::related::RelatedEntity;
use async_trait::async_trait;
use std::sync::Arc;

/// Relation traversal resolved by the host persistence layer: load the
/// entity currently reachable from a tracked record through a named
/// relation (e.g. the row referenced by a foreign key). `None` when the
/// relation does not resolve.
#[async_trait]
pub trait RelationSource: Send + Sync {
    async fn follow(
        &self,
        record_type: &str,
        record_id: i64,
        relation: &str,
    ) -> DomainResult<Option<Arc<dyn RelatedEntity>>>;
}
