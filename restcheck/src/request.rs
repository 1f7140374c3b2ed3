use crate::{data::Method, error::Error};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A ready-to-send description of an HTTP request.
///
/// The path is authoritative: dispatch resolves it against the configured base URL and
/// never takes a second path.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
    pub query_params: Option<BTreeMap<String, String>>,
}

impl RequestDescriptor {
    fn new<S: Into<String>>(method: Method, path: S, body: Option<Value>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(String::from(CONTENT_TYPE), String::from(JSON_CONTENT_TYPE));

        Self {
            method,
            path: path.into(),
            headers,
            body,
            query_params: None,
        }
    }

    pub fn for_get<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Get, path, None)
    }

    /// Serializes `body` to JSON and attaches it verbatim.
    pub fn for_post<S: Into<String>, B: Serialize + ?Sized>(path: S, body: &B) -> Result<Self, Error> {
        Ok(Self::new(Method::Post, path, Some(serde_json::to_value(body)?)))
    }

    pub fn for_put<S: Into<String>, B: Serialize + ?Sized>(path: S, body: &B) -> Result<Self, Error> {
        Ok(Self::new(Method::Put, path, Some(serde_json::to_value(body)?)))
    }

    pub fn for_delete<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Delete, path, None)
    }

    pub fn with_query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .get_or_insert_with(BTreeMap::new)
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        let name = name.into();
        // a header given twice with different casing keeps the latest value only
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// Resolves the path against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');

        if self.path.is_empty() || self.path.starts_with('/') {
            format!("{}{}", base_url, self.path)
        } else {
            format!("{}/{}", base_url, self.path)
        }
    }
}
