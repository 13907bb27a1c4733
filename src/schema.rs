use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

use crate::response::Verdict;

/// The GetInventory output schema (JSON Schema draft-07), embedded at build time.
pub const OUTPUT_SCHEMA_JSON: &str = include_str!("../schemas/output.json");

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Schema parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    Compile(String),
    #[error("Instance validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// Parsed output schema, shared for the lifetime of the process.
pub fn output_schema() -> &'static Value {
    static DOCUMENT: OnceLock<Value> = OnceLock::new();
    DOCUMENT.get_or_init(|| {
        serde_json::from_str(OUTPUT_SCHEMA_JSON).expect("embedded output schema must be valid JSON")
    })
}

/// A schema document together with its compiled draft-07 validator.
pub struct ResponseSchema {
    document: Value,
    validator: Validator,
}

impl std::fmt::Debug for ResponseSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSchema")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl ResponseSchema {
    /// The embedded output schema, compiled on first use.
    pub fn builtin() -> &'static ResponseSchema {
        static BUILTIN: OnceLock<ResponseSchema> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            ResponseSchema::from_value(output_schema().clone())
                .expect("embedded output schema must compile")
        })
    }

    pub fn from_value(document: Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::draft7::new(&document)
            .map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self { document, validator })
    }

    /// Load a schema from a `.json` file on disk.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let file = std::fs::File::open(path)?;
        let document: Value = serde_json::from_reader(std::io::BufReader::new(file))?;
        Self::from_value(document)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate an instance, collecting every violation the validator reports.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed(errors))
        }
    }

    pub fn check(&self, instance: &Value) -> Verdict {
        match self.validate(instance) {
            Ok(()) => Verdict::pass(),
            Err(SchemaError::ValidationFailed(errors)) => Verdict::fail(errors),
            Err(other) => Verdict::fail(vec![other.to_string()]),
        }
    }
}

impl FromStr for ResponseSchema {
    type Err = SchemaError;

    fn from_str(schema_str: &str) -> Result<Self, Self::Err> {
        Self::from_value(serde_json::from_str(schema_str)?)
    }
}

/// Validate an instance against the embedded output schema.
pub fn validate_response(instance: &Value) -> Result<(), SchemaError> {
    ResponseSchema::builtin().validate(instance)
}

/// Validate a JSON instance against a draft-07 JSON Schema, both given as text.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaError> {
    let schema: ResponseSchema = schema_str.parse()?;
    let instance: Value = serde_json::from_str(instance_str)?;
    schema.validate(&instance)
}
