// src/application/ports/actor.rs
use crate::domain::audit::entity::ActorId;
use crate::domain::errors::DomainResult;
use crate::domain::tracked::related::RelatedEntity;
use async_trait::async_trait;
use std::sync::Arc;

/// Identity collaborator: who is performing the save right now.
/// `None` when no actor is authenticated.
pub trait ActorProvider: Send + Sync {
    fn current_actor_id(&self) -> Option<ActorId>;
}

/// Looks up the actor entity behind an audit row's stamped id, for the
/// actor accessor on the query surface. The host owns the user store.
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    async fn find(&self, id: ActorId) -> DomainResult<Option<Arc<dyn RelatedEntity>>>;
}
