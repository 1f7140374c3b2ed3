use crate::error::{AssertionFailure, Error};
use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::{collections::HashMap, fmt::Debug, fs, path::Path};
use tracing::debug;

const BUILTIN_SCHEMAS: [(&str, &str); 6] = [
    ("post-schema.json", include_str!("../schemas/post-schema.json")),
    ("comment-schema.json", include_str!("../schemas/comment-schema.json")),
    ("album-schema.json", include_str!("../schemas/album-schema.json")),
    ("photo-schema.json", include_str!("../schemas/photo-schema.json")),
    ("todo-schema.json", include_str!("../schemas/todo-schema.json")),
    ("user-schema.json", include_str!("../schemas/user-schema.json")),
];

struct CompiledSchema {
    document: Value,
    validator: Validator,
}

/// Named JSON Schema documents, compiled once on registration.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, CompiledSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schemas of the six fixture resources, keyed `post-schema.json` and so on.
    pub fn builtin() -> Result<Self, Error> {
        let mut registry = Self::new();

        for (schema_id, source) in BUILTIN_SCHEMAS.iter() {
            let document = serde_json::from_str(source).map_err(|e| Error::InvalidSchema {
                schema_id: String::from(*schema_id),
                reason: e.to_string(),
            })?;
            registry.register(*schema_id, document)?;
        }

        Ok(registry)
    }

    /// Registers every `*.json` file of `dir` under its file name.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let mut registry = Self::new();

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            let is_json = path.extension().map(|ext| ext == "json").unwrap_or(false);
            let schema_id = match path.file_name() {
                Some(name) if is_json && path.is_file() => name.to_string_lossy().into_owned(),
                _ => continue,
            };

            let document =
                serde_json::from_str(&fs::read_to_string(&path)?).map_err(|e| Error::InvalidSchema {
                    schema_id: schema_id.clone(),
                    reason: e.to_string(),
                })?;
            registry.register(schema_id, document)?;
        }

        Ok(registry)
    }

    pub fn register<S: Into<String>>(&mut self, schema_id: S, document: Value) -> Result<(), Error> {
        let schema_id = schema_id.into();
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(&document)
            .map_err(|e| Error::InvalidSchema {
                schema_id: schema_id.clone(),
                reason: e.to_string(),
            })?;

        debug!(schema_id = %schema_id, "schema registered");
        self.schemas.insert(
            schema_id,
            CompiledSchema {
                document,
                validator,
            },
        );

        Ok(())
    }

    pub fn get(&self, schema_id: &str) -> Option<&Value> {
        self.schemas.get(schema_id).map(|schema| &schema.document)
    }

    pub fn contains(&self, schema_id: &str) -> bool {
        self.schemas.contains_key(schema_id)
    }

    pub fn schema_ids(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Validates `instance`, reporting every violation.
    pub fn validate(&self, schema_id: &str, instance: &Value) -> Result<(), AssertionFailure> {
        let schema = self
            .schemas
            .get(schema_id)
            .ok_or_else(|| AssertionFailure::SchemaNotFound {
                schema_id: String::from(schema_id),
            })?;

        let violations = schema
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect::<Vec<_>>();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AssertionFailure::SchemaMismatch {
                schema_id: String::from(schema_id),
                violations,
            })
        }
    }
}

impl Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids = self.schema_ids().collect::<Vec<_>>();
        ids.sort_unstable();
        f.debug_struct("SchemaRegistry").field("schemas", &ids).finish()
    }
}
