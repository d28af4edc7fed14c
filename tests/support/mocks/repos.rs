// tests/support/mocks/repos.rs
use async_trait::async_trait;
use revtrail::application::ports::schema::SchemaIntrospector;
use revtrail::domain::audit::cursor::AuditCursor;
use revtrail::domain::audit::entity::AuditRecord;
use revtrail::domain::audit::repository::AuditRecordRepository;
use revtrail::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

use super::time::fixed_now;

/* --------------------------- InMemoryAuditRepository --------------------------- */

/// Id-assigning in-memory audit store with the same keyset-pagination
/// contract as the Postgres repository.
#[derive(Default)]
pub struct InMemoryAuditRepository {
    rows: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<AuditRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AuditRecordRepository for InMemoryAuditRepository {
    async fn insert(&self, record: AuditRecord) -> DomainResult<AuditRecord> {
        let mut rows = self.rows.lock().unwrap();
        let mut persisted = record;
        persisted.id = Some(rows.len() as i64 + 1);
        if persisted.created_at.is_none() {
            persisted.created_at = Some(fixed_now());
        }
        rows.push(persisted.clone());
        Ok(persisted)
    }

    async fn find_by_record(
        &self,
        record_type: &str,
        record_id: i64,
        limit: u32,
        cursor: Option<AuditCursor>,
    ) -> DomainResult<(Vec<AuditRecord>, Option<AuditCursor>)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<AuditRecord> = rows
            .iter()
            .filter(|row| row.record_type == record_type && row.record_id == record_id)
            .filter(|row| match &cursor {
                Some(c) => {
                    let key = (row.created_at.unwrap(), row.id.unwrap());
                    key < (c.created_at, c.id)
                }
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by_key(|row| std::cmp::Reverse((row.created_at.unwrap(), row.id.unwrap())));

        let fetch = limit as usize + 1;
        let next_cursor = if matching.len() >= fetch {
            matching.truncate(limit as usize);
            matching
                .last()
                .map(|last| AuditCursor::new(last.created_at.unwrap(), last.id.unwrap()))
        } else {
            None
        };
        Ok((matching, next_cursor))
    }
}

/* --------------------------- FailingAuditRepository --------------------------- */

/// Delegates to an inner in-memory store but refuses configured field
/// keys, for exercising the continue-on-error write path.
pub struct FailingAuditRepository {
    inner: InMemoryAuditRepository,
    failing_fields: Vec<String>,
}

impl FailingAuditRepository {
    pub fn failing_on<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: InMemoryAuditRepository::new(),
            failing_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> Vec<AuditRecord> {
        self.inner.rows()
    }
}

#[async_trait]
impl AuditRecordRepository for FailingAuditRepository {
    async fn insert(&self, record: AuditRecord) -> DomainResult<AuditRecord> {
        if self.failing_fields.iter().any(|f| *f == record.field_key) {
            return Err(DomainError::Persistence("storage unavailable".into()));
        }
        self.inner.insert(record).await
    }

    async fn find_by_record(
        &self,
        record_type: &str,
        record_id: i64,
        limit: u32,
        cursor: Option<AuditCursor>,
    ) -> DomainResult<(Vec<AuditRecord>, Option<AuditCursor>)> {
        self.inner
            .find_by_record(record_type, record_id, limit, cursor)
            .await
    }
}

/* ------------------------------- StubSchema ------------------------------- */

/// Fixed schema listing; `unavailable` simulates an introspection
/// failure.
pub struct StubSchema {
    fields: Vec<String>,
    available: bool,
}

impl StubSchema {
    pub fn posts() -> Self {
        Self::of(&["id", "title", "description", "user_id", "created_at", "updated_at"])
    }

    pub fn of(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fields: Vec::new(),
            available: false,
        }
    }
}

#[async_trait]
impl SchemaIntrospector for StubSchema {
    async fn schema_fields(&self, _table: &str) -> DomainResult<Vec<String>> {
        if !self.available {
            return Err(DomainError::Persistence("schema introspection failed".into()));
        }
        Ok(self.fields.clone())
    }
}
