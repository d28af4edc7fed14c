use crate::application::ports::actor::ActorProvider;
use crate::domain::audit::entity::ActorId;

/// Actor source with a fixed answer. Hosts without an authentication
/// integration use `anonymous()`; tests pin a known actor with `of`.
#[derive(Debug, Clone, Default)]
pub struct StaticActorProvider {
    actor_id: Option<ActorId>,
}

impl StaticActorProvider {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn of(actor_id: ActorId) -> Self {
        Self {
            actor_id: Some(actor_id),
        }
    }
}

impl ActorProvider for StaticActorProvider {
    fn current_actor_id(&self) -> Option<ActorId> {
        self.actor_id
    }
}
