use super::map_sqlx;
use crate::application::ports::schema::SchemaIntrospector;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

/// Schema introspection over `information_schema.columns`. Column order
/// follows `ordinal_position`, which is the wildcard audit-field order.
#[derive(Clone)]
pub struct PostgresSchemaIntrospector {
    pool: PgPool,
}

impl PostgresSchemaIntrospector {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaIntrospector for PostgresSchemaIntrospector {
    async fn schema_fields(&self, table: &str) -> DomainResult<Vec<String>> {
        sqlx::query_scalar(
            r#"
            SELECT column_name::text
            FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1
            ORDER BY ordinal_position
            "#,
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
