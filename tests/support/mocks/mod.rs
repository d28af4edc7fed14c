pub mod relations;
pub mod repos;
pub mod time;

pub use records::TestPost;
pub use relations::{StubActorDirectory, StubEntity, StubRelationSource, UppercaseTransformer};
pub use repos::{FailingAuditRepository, InMemoryAuditRepository, StubSchema};
pub use time::{FixedClock, fixed_now};
