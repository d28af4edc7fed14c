use super::map_sqlx;
use crate::domain::audit::cursor::AuditCursor;
use crate::domain::audit::entity::{ActorId, AuditRecord};
use crate::domain::audit::repository::AuditRecordRepository;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

#[derive(Clone)]
pub struct PostgresAuditRecordRepository {
    pool: PgPool,
}

impl PostgresAuditRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<AuditRecord, sqlx::Error> {
    Ok(AuditRecord {
        id: Some(row.try_get::<i64, _>("id")?),
        record_type: row.try_get("record_type")?,
        record_id: row.try_get("record_id")?,
        actor_id: row.try_get::<Option<i64>, _>("actor_id")?.map(ActorId),
        field_key: row.try_get("field_key")?,
        old_value: row.try_get("old_value")?,
        new_value: row.try_get("new_value")?,
        created_at: Some(row.try_get::<DateTime<Utc>, _>("created_at")?),
    })
}

#[async_trait]
impl AuditRecordRepository for PostgresAuditRecordRepository {
    async fn insert(&self, record: AuditRecord) -> DomainResult<AuditRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO audit_records
                (record_type, record_id, actor_id, field_key, old_value, new_value, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now()))
            RETURNING id, created_at
            "#,
        )
        .bind(&record.record_type)
        .bind(record.record_id)
        .bind(record.actor_id.map(i64::from))
        .bind(&record.field_key)
        .bind(&record.old_value)
        .bind(&record.new_value)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut persisted = record;
        persisted.id = Some(row.try_get("id").map_err(map_sqlx)?);
        persisted.created_at = Some(row.try_get("created_at").map_err(map_sqlx)?);
        Ok(persisted)
    }

    async fn find_by_record(
        &self,
        record_type: &str,
        record_id: i64,
        limit: u32,
        cursor: Option<AuditCursor>,
    ) -> DomainResult<(Vec<AuditRecord>, Option<AuditCursor>)> {
        // Fetch one extra row to decide whether another page exists.
        let fetch = i64::from(limit) + 1;
        let (cursor_created_at, cursor_id) = match cursor {
            Some(c) => (Some(c.created_at), Some(c.id)),
            None => (None, None),
        };

        let rows = sqlx::query(
            r#"
            SELECT id, record_type, record_id, actor_id, field_key,
                   old_value, new_value, created_at
            FROM audit_records
            WHERE record_type = $1
              AND record_id = $2
              AND ($3::timestamptz IS NULL OR (created_at, id) < ($3, $4))
            ORDER BY created_at DESC, id DESC
            LIMIT $5
            "#,
        )
        .bind(record_type)
        .bind(record_id)
        .bind(cursor_created_at)
        .bind(cursor_id)
        .bind(fetch)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut items = rows
            .iter()
            .map(map_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx)?;

        let next_cursor = if items.len() as i64 == fetch {
            items.pop();
            items.last().and_then(|last| {
                last.created_at
                    .zip(last.id)
                    .map(|(created_at, id)| AuditCursor::new(created_at, id))
            })
        } else {
            None
        };

        Ok((items, next_cursor))
    }
}
