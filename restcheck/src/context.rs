use crate::{
    config::Configuration,
    data::ResponsePayload,
    error::Error,
    logging,
    request::{RequestDescriptor, JSON_CONTENT_TYPE},
    schema::SchemaRegistry,
    transport::{ReqwestTransport, Transport},
};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

/// Everything a test case needs to talk to the fixture service.
///
/// Built once per test by a setup function and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ApiContext {
    configuration: Arc<Configuration>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport + Send + Sync>,
    schemas: Arc<SchemaRegistry>,
}

impl ApiContext {
    /// The standard setup: configuration from `config.properties`, builtin schemas,
    /// reqwest transport, JSON default headers.
    pub fn setup() -> Result<Self, Error> {
        logging::init();
        Self::builder().build()
    }

    pub fn builder() -> ApiContextBuilder {
        ApiContextBuilder::new()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Dispatches against the configured base URL. Headers set on the descriptor win
    /// over the defaults.
    pub fn send(&self, request: &RequestDescriptor) -> Result<ResponsePayload, Error> {
        let mut request = request.clone();
        for (name, value) in &self.default_headers {
            if !request.headers.keys().any(|k| k.eq_ignore_ascii_case(name)) {
                request.headers.insert(name.clone(), value.clone());
            }
        }

        self.transport
            .send(self.configuration.base_url(), &request)
    }
}

/// Builder used to assemble an ApiContext from non-default parts.
#[derive(Debug)]
pub struct ApiContextBuilder {
    configuration: Option<Configuration>,
    default_headers: HashMap<String, String>,
    transport: Option<Arc<dyn Transport + Send + Sync>>,
    schemas: Option<SchemaRegistry>,
}

impl ApiContextBuilder {
    pub fn new() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(String::from("Content-Type"), String::from(JSON_CONTENT_TYPE));
        default_headers.insert(String::from("Accept"), String::from(JSON_CONTENT_TYPE));

        Self {
            configuration: None,
            default_headers,
            transport: None,
            schemas: None,
        }
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_default_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        let name = name.into();
        self.default_headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
        self.default_headers.insert(name, value.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_schemas(mut self, schemas: SchemaRegistry) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Consumes the builder, filling every part left unset with its default.
    pub fn build(self) -> Result<ApiContext, Error> {
        let configuration = self.configuration.unwrap_or_else(Configuration::load);
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&configuration)?),
        };
        let schemas = match self.schemas {
            Some(schemas) => schemas,
            None => SchemaRegistry::builtin()?,
        };

        debug!(
            base_url = configuration.base_url(),
            environment = configuration.environment(),
            timeout_ms = configuration.default_timeout(),
            "api context ready"
        );

        Ok(ApiContext {
            configuration: Arc::new(configuration),
            default_headers: self.default_headers,
            transport,
            schemas: Arc::new(schemas),
        })
    }
}

impl Default for ApiContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
