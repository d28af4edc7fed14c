pub mod hooks;
mod record_save;
mod service;

pub use hooks::AfterSaveHooks;
pub use service::AuditRecorder;
