// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_record;
mod postgres_schema;

pub use error::map_sqlx;
pub use postgres_audit_record::PostgresAuditRecordRepository;
pub use postgres_schema::PostgresSchemaIntrospector;
