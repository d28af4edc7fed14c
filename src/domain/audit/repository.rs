use crate::domain::audit::cursor::AuditCursor;
use crate::domain::audit::entity::AuditRecord;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuditRecordRepository: Send + Sync {
    /// Persists one audit row and returns it with its storage-assigned
    /// id and timestamp filled in.
    async fn insert(&self, record: AuditRecord) -> DomainResult<AuditRecord>;

    /// Audit history for one tracked record (polymorphic type + id
    /// link), newest first, keyset-paginated. Returns the page and the
    /// cursor for the next one when more rows exist.
    async fn find_by_record(
        &self,
        record_type: &str,
        record_id: i64,
        limit: u32,
        cursor: Option<AuditCursor>,
    ) -> DomainResult<(Vec<AuditRecord>, Option<AuditCursor>)>;
}
