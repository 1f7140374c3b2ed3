//! Assertions over a completed response.
//!
//! Each check is a single evaluate-or-fail step reporting expected and actual values.
//! Chain them with `?` to fail a test on the first unmet expectation.

use crate::{
    data::ResponsePayload,
    error::AssertionFailure,
    json_path,
    schema::SchemaRegistry,
};
use serde_json::Value;

pub type Verdict = Result<(), AssertionFailure>;

pub fn status_code(response: &ResponsePayload, expected: u16) -> Verdict {
    if response.status_code == expected {
        Ok(())
    } else {
        Err(AssertionFailure::StatusCode {
            expected,
            actual: response.status_code,
        })
    }
}

pub fn response_time(response: &ResponsePayload, max_ms: u64) -> Verdict {
    if response.elapsed_ms <= max_ms {
        Ok(())
    } else {
        Err(AssertionFailure::ResponseTime {
            max_ms,
            actual_ms: response.elapsed_ms,
        })
    }
}

/// The header must be present and contain `expected` (case-sensitive).
pub fn header(response: &ResponsePayload, name: &str, expected: &str) -> Verdict {
    let actual = response
        .header(name)
        .ok_or_else(|| AssertionFailure::HeaderMissing {
            name: String::from(name),
        })?;

    if actual.contains(expected) {
        Ok(())
    } else {
        Err(AssertionFailure::HeaderMismatch {
            name: String::from(name),
            expected: String::from(expected),
            actual: String::from(actual),
        })
    }
}

pub fn json_schema(response: &ResponsePayload, registry: &SchemaRegistry, schema_id: &str) -> Verdict {
    if !registry.contains(schema_id) {
        return Err(AssertionFailure::SchemaNotFound {
            schema_id: String::from(schema_id),
        });
    }

    registry.validate(schema_id, response.json()?)
}

pub fn body_field<V: Into<Value>>(response: &ResponsePayload, path: &str, expected: V) -> Verdict {
    let expected = expected.into();
    let actual = select(response, path)?.ok_or_else(|| AssertionFailure::FieldMissing {
        path: String::from(path),
    })?;

    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::FieldMismatch {
            path: String::from(path),
            expected,
            actual,
        })
    }
}

/// The field must exist and hold something other than `null`.
pub fn body_field_present(response: &ResponsePayload, path: &str) -> Verdict {
    match select(response, path)? {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(AssertionFailure::FieldMissing {
            path: String::from(path),
        }),
    }
}

pub fn body_array_length(response: &ResponsePayload, expected: usize) -> Verdict {
    let actual = root_array(response)?.len();

    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::ArrayLength { expected, actual })
    }
}

/// Every element of the root array must carry `field == expected`. An empty array
/// passes.
pub fn each_element_field<V: Into<Value>>(
    response: &ResponsePayload,
    field: &str,
    expected: V,
) -> Verdict {
    let expected = expected.into();

    for (index, element) in root_array(response)?.iter().enumerate() {
        let actual = json_path::select(element, field)
            .map_err(|e| invalid_path(field, e))?
            .unwrap_or(Value::Null);

        if actual != expected {
            return Err(AssertionFailure::ElementMismatch {
                field: String::from(field),
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

fn select(response: &ResponsePayload, path: &str) -> Result<Option<Value>, AssertionFailure> {
    json_path::select(response.json()?, path).map_err(|e| invalid_path(path, e))
}

fn root_array(response: &ResponsePayload) -> Result<&Vec<Value>, AssertionFailure> {
    match response.json()? {
        Value::Array(items) => Ok(items),
        other => Err(AssertionFailure::NotAnArray {
            actual: kind_of(other),
        }),
    }
}

fn invalid_path(path: &str, error: json_path::PathError) -> AssertionFailure {
    AssertionFailure::InvalidPath {
        path: String::from(path),
        reason: error.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
