// src/domain/tracked/policy.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tracked::record::SaveKind;
use std::collections::HashMap;

/// Which fields of a record are candidates for auditing. `All` is the
/// wildcard: every column the schema reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelection {
    #[default]
    All,
    Only(Vec<String>),
}

/// Which save events produce audit rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuditTrigger {
    #[default]
    EverySave,
    UpdatesOnly,
}

impl AuditTrigger {
    pub fn fires_on(self, kind: SaveKind) -> bool {
        match self {
            Self::EverySave => true,
            Self::UpdatesOnly => kind == SaveKind::Updated,
        }
    }
}

/// A validated dot path telling display resolution how to turn a raw
/// stored value into something human-meaningful: a relation hop,
/// optional nested hops, and a final attribute, e.g. `user.username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPath {
    relation: String,
    intermediates: Vec<String>,
    attribute: String,
}

impl RelationPath {
    /// A mean must name at least a relation and an attribute; the
    /// degenerate single-segment form is rejected here rather than at
    /// read time.
    pub fn parse(path: &str) -> DomainResult<Self> {
        let segments: Vec<String> = path.split('.').map(str::to_owned).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(DomainError::Validation(format!(
                "relation mean '{path}' contains an empty segment"
            )));
        }
        let [relation, intermediates @ .., attribute] = segments.as_slice() else {
            return Err(DomainError::Validation(format!(
                "relation mean '{path}' must name a relation and an attribute"
            )));
        };
        Ok(Self {
            relation: relation.clone(),
            intermediates: intermediates.to_vec(),
            attribute: attribute.clone(),
        })
    }

    /// The relation hop resolved through the host persistence layer.
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Nested relation hops walked on the related entity.
    pub fn intermediates(&self) -> &[String] {
        &self.intermediates
    }

    /// The attribute read (or transformed) on the final entity.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

/// Typed per-entity audit configuration, declared at registration time.
/// Replaces reflective per-instance property checks with a struct that
/// is validated when built: an invalid relation mean fails
/// `with_relation_mean`, never a read.
#[derive(Debug, Clone, Default)]
pub struct AuditPolicy {
    selection: FieldSelection,
    excluded_fields: Vec<String>,
    revise_timestamps: bool,
    timestamp_field: Option<String>,
    display_labels: HashMap<String, String>,
    relation_means: HashMap<String, RelationPath>,
    trigger: AuditTrigger,
}

const DEFAULT_TIMESTAMP_FIELD: &str = "updated_at";

impl AuditPolicy {
    /// Wildcard selection, no exclusions, timestamps not revised,
    /// firing on every save.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict auditing to the named fields, in the given order.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = FieldSelection::Only(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Opt the update-timestamp field back into auditing.
    pub fn revise_timestamps(mut self, revise: bool) -> Self {
        self.revise_timestamps = revise;
        self
    }

    pub fn timestamp_field(mut self, field: impl Into<String>) -> Self {
        self.timestamp_field = Some(field.into());
        self
    }

    pub fn with_display_label(
        mut self,
        field: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.display_labels.insert(field.into(), label.into());
        self
    }

    /// Attach a relation mean (dot path) to a field. The path is
    /// validated here, at declaration time.
    pub fn with_relation_mean(
        mut self,
        field: impl Into<String>,
        path: &str,
    ) -> DomainResult<Self> {
        self.relation_means
            .insert(field.into(), RelationPath::parse(path)?);
        Ok(self)
    }

    pub fn with_trigger(mut self, trigger: AuditTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    pub fn excluded_fields(&self) -> &[String] {
        &self.excluded_fields
    }

    pub fn revises_timestamps(&self) -> bool {
        self.revise_timestamps
    }

    pub fn timestamp_field_name(&self) -> &str {
        self.timestamp_field
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FIELD)
    }

    pub fn trigger(&self) -> AuditTrigger {
        self.trigger
    }

    pub fn display_label(&self, field: &str) -> Option<&str> {
        self.display_labels.get(field).map(String::as_str)
    }

    pub fn relation_mean(&self, field: &str) -> Option<&RelationPath> {
        self.relation_means.get(field)
    }
}

/// Policies keyed by record type. Registering a type again replaces its
/// policy, which is how runtime column overrides are expressed.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    policies: HashMap<String, AuditPolicy>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, record_type: impl Into<String>, policy: AuditPolicy) {
        self.policies.insert(record_type.into(), policy);
    }

    pub fn get(&self, record_type: &str) -> Option<&AuditPolicy> {
        self.policies.get(record_type)
    }
}
