pub mod audit;
pub mod pagination;

pub use audit::{AuditRecordDto, FieldAuditFailure, SaveAuditReport};
pub use pagination::CursorPage;
