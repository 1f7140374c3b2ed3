use hyper::http;
use serde_json::Value;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Couldn't serialize the request body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IoError: {0}")]
    Io(#[from] io::Error),
    #[error("Hyper error: {0}")]
    Hyper(#[from] hyper::Error),
    #[error("Http error: {0}")]
    Http(#[from] http::Error),
    #[error("Invalid header name")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    #[error("Invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("Schema {schema_id} is not a valid JSON schema: {reason}")]
    InvalidSchema { schema_id: String, reason: String },
}

/// An unmet expectation on a response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionFailure {
    #[error("Expected status code {expected} but got {actual}")]
    StatusCode { expected: u16, actual: u16 },
    #[error("Response time {actual_ms}ms exceeded maximum {max_ms}ms")]
    ResponseTime { max_ms: u64, actual_ms: u64 },
    #[error("Header {name} not found in response")]
    HeaderMissing { name: String },
    #[error("Header {name} expected to contain '{expected}' but was '{actual}'")]
    HeaderMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("Schema file not found: {schema_id}")]
    SchemaNotFound { schema_id: String },
    #[error("Response does not match schema {schema_id}: {}", .violations.join("; "))]
    SchemaMismatch {
        schema_id: String,
        violations: Vec<String>,
    },
    #[error("Response body is not valid JSON: '{body}'")]
    BodyNotJson { body: String },
    #[error("Invalid path expression '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("Expected {path} to be present but it was missing")]
    FieldMissing { path: String },
    #[error("Expected {path} to be {expected} but was {actual}")]
    FieldMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    #[error("Expected the response body to be a JSON array but it was {actual}")]
    NotAnArray { actual: &'static str },
    #[error("Expected response array size {expected} but got {actual}")]
    ArrayLength { expected: usize, actual: usize },
    #[error("Expected {field} of element {index} to be {expected} but was {actual}")]
    ElementMismatch {
        field: String,
        index: usize,
        expected: Value,
        actual: Value,
    },
}
