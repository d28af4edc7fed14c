// src/domain/tracked/related.rs
use serde_json::Value;
use std::sync::Arc;

/// A per-attribute value transform ("mutator") a relation target may
/// expose: converts a raw stored value into its display form.
pub trait ValueTransformer: Send + Sync {
    fn supports(&self, attribute: &str) -> bool;

    fn transform(&self, attribute: &str, raw: Value) -> Value;
}

/// An entity reached through a relation hop during display resolution.
///
/// Attribute and nested-relation access is by name; `transformer`
/// advertises the optional `ValueTransformer` capability, which
/// resolution checks before falling back to a plain attribute read.
pub trait RelatedEntity: Send + Sync {
    fn attribute(&self, name: &str) -> Option<Value>;

    fn related(&self, name: &str) -> Option<Arc<dyn RelatedEntity>> {
        let _ = name;
        None
    }

    fn transformer(&self) -> Option<&dyn ValueTransformer> {
        None
    }
}
