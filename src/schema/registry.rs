use super::field::FieldSchema;
use super::tables;
use crate::error::{BuildError, BuildResult};
use crate::models::ContactVariant;
use std::collections::HashMap;

/// Lookup of field schemas by variant tag.
///
/// Built once when a director is constructed and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<ContactVariant, FieldSchema>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Registry holding the built-in person and organization schemas.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(tables::person::SCHEMA);
        registry.register(tables::organization::SCHEMA);
        registry
    }

    /// Add or replace the schema for its variant.
    pub fn register(&mut self, schema: FieldSchema) {
        self.schemas.insert(schema.variant(), schema);
    }

    pub fn get(&self, variant: ContactVariant) -> Option<&FieldSchema> {
        self.schemas.get(&variant)
    }

    /// Like [`SchemaRegistry::get`], treating a missing schema as a
    /// programming-contract failure.
    pub fn require(&self, variant: ContactVariant) -> BuildResult<&FieldSchema> {
        self.get(variant).ok_or(BuildError::MissingSchema(variant))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
