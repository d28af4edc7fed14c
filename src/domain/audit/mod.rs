pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::AuditCursor;
pub use entity::{ActorId, AuditRecord};
pub use repository::AuditRecordRepository;
