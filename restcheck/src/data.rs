use crate::error::AssertionFailure;
use serde_json::Value;
use std::{collections::HashMap, fmt::Display};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A completed response as seen by the validators.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePayload {
    pub status_code: u16,
    /// Header names are stored lowercase.
    pub headers: HashMap<String, String>,
    /// Parsed body, `Value::Null` when the body is empty or not JSON.
    pub body: Value,
    pub raw_body: String,
    pub elapsed_ms: u64,
}

impl ResponsePayload {
    pub fn new(
        status_code: u16,
        headers: HashMap<String, String>,
        raw_body: String,
        elapsed_ms: u64,
    ) -> Self {
        let body = serde_json::from_str(&raw_body).unwrap_or(Value::Null);
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status_code,
            headers,
            body,
            raw_body,
            elapsed_ms,
        }
    }

    pub fn header<S: AsRef<str>>(&self, name: S) -> Option<&str> {
        self.headers
            .get(&name.as_ref().to_lowercase())
            .map(String::as_str)
    }

    /// The parsed body, failing when a non-empty body isn't JSON.
    pub fn json(&self) -> Result<&Value, AssertionFailure> {
        if self.body.is_null() && !self.raw_body.trim().is_empty() && self.raw_body.trim() != "null"
        {
            return Err(AssertionFailure::BodyNotJson {
                body: self.raw_body.clone(),
            });
        }

        Ok(&self.body)
    }
}

/// A request as received by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header<S: AsRef<str>>(&self, name: S) -> Option<&str> {
        self.headers
            .get(&name.as_ref().to_lowercase())
            .map(String::as_str)
    }
}
