//! JSON Schema for the GetInventory sample function's response.
//!
//! The schema (draft-07) requires an integer `statusCode` and a string `body`.
//! It is embedded from `schemas/output.json`, exposed as a shared
//! [`serde_json::Value`], and compiled once into a validator. A small stdio
//! checker (`response-schema-check`) validates newline-delimited responses.

pub mod checker;
pub mod config;
pub mod response;
pub mod schema;

pub use response::{Response, Verdict};
pub use schema::{output_schema, validate_response, ResponseSchema, SchemaError, OUTPUT_SCHEMA_JSON};
