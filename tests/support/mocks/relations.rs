// tests/support/mocks/relations.rs
use async_trait::async_trait;
use revtrail::application::ports::actor::ActorDirectory;
use revtrail::application::ports::relations::RelationSource;
use revtrail::domain::audit::entity::ActorId;
use revtrail::domain::errors::DomainResult;
use revtrail::domain::tracked::related::{RelatedEntity, ValueTransformer};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Attribute-map entity standing in for a host row reached through a
/// relation (a user, a profile, ...).
pub struct StubEntity {
    attributes: HashMap<String, Value>,
    relations: HashMap<String, Arc<dyn RelatedEntity>>,
    transformer: Option<UppercaseTransformer>,
}

impl StubEntity {
    pub fn with_attributes(attributes: &[(&str, Value)]) -> Self {
        Self {
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
            relations: HashMap::new(),
            transformer: None,
        }
    }

    pub fn user(username: &str) -> Arc<dyn RelatedEntity> {
        Arc::new(Self::with_attributes(&[("username", json!(username))]))
    }

    pub fn with_relation(mut self, name: &str, target: Arc<dyn RelatedEntity>) -> Self {
        self.relations.insert(name.to_owned(), target);
        self
    }

    pub fn transforming(mut self, transformer: UppercaseTransformer) -> Self {
        self.transformer = Some(transformer);
        self
    }
}

impl RelatedEntity for StubEntity {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn related(&self, name: &str) -> Option<Arc<dyn RelatedEntity>> {
        self.relations.get(name).cloned()
    }

    fn transformer(&self) -> Option<&dyn ValueTransformer> {
        self.transformer
            .as_ref()
            .map(|t| t as &dyn ValueTransformer)
    }
}

/// Upper-cases string values for one attribute; the raw stored value
/// flows through, which is what distinguishes a transform from a plain
/// attribute read.
pub struct UppercaseTransformer {
    pub attribute: String,
}

impl ValueTransformer for UppercaseTransformer {
    fn supports(&self, attribute: &str) -> bool {
        attribute == self.attribute
    }

    fn transform(&self, _attribute: &str, raw: Value) -> Value {
        match raw {
            Value::String(s) => json!(s.to_uppercase()),
            other => other,
        }
    }
}

/// Relation source keyed by relation name; retargetable so a test can
/// move a foreign key from one stub row to another mid-scenario.
#[derive(Default)]
pub struct StubRelationSource {
    targets: Mutex<HashMap<String, Arc<dyn RelatedEntity>>>,
}

impl StubRelationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, relation: &str, target: Arc<dyn RelatedEntity>) {
        self.targets
            .lock()
            .unwrap()
            .insert(relation.to_owned(), target);
    }
}

#[async_trait]
impl RelationSource for StubRelationSource {
    async fn follow(
        &self,
        _record_type: &str,
        _record_id: i64,
        relation: &str,
    ) -> DomainResult<Option<Arc<dyn RelatedEntity>>> {
        Ok(self.targets.lock().unwrap().get(relation).cloned())
    }
}

/// Actor store keyed by id.
#[derive(Default)]
pub struct StubActorDirectory {
    actors: Mutex<HashMap<i64, Arc<dyn RelatedEntity>>>,
}

impl StubActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, id: i64, actor: Arc<dyn RelatedEntity>) {
        self.actors.lock().unwrap().insert(id, actor);
    }
}

#[async_trait]
impl ActorDirectory for StubActorDirectory {
    async fn find(&self, id: ActorId) -> DomainResult<Option<Arc<dyn RelatedEntity>>> {
        Ok(self.actors.lock().unwrap().get(&i64::from(id)).cloned())
    }
}
