//! Field-level audit trail core for SQL-backed persistence layers.
//!
//! A host application registers an [`domain::tracked::AuditPolicy`] per
//! record type and calls
//! [`application::commands::audit::AfterSaveHooks::after_save`] from its
//! post-save extension point. The crate selects the audited fields,
//! detects which ones changed, and appends one immutable
//! `audit_records` row per change, stamped with the current actor.
//! Display concerns (labels, relation means, value transforms) are
//! applied lazily on read through
//! [`application::queries::audit::AuditQueryService`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
