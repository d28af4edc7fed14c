// src/application/ports/mod.rs
pub mod actor;
pub mod relations;
pub mod schema;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ActorProviderPort = dyn actor::ActorProvider;
pub type ActorDirectoryPort = dyn actor::ActorDirectory;
pub type RelationSourcePort = dyn relations::RelationSource;
pub type SchemaIntrospectorPort = dyn schema::SchemaIntrospector;
pub type ClockPort = dyn time::Clock;
