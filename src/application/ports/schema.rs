// src/application/ports/schema.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Schema introspection capability of the host persistence layer.
#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    /// Column names of the given table, in schema order. The order is
    /// load-bearing: it is the wildcard audit-field order.
    async fn schema_fields(&self, table: &str) -> DomainResult<Vec<String>>;
}
