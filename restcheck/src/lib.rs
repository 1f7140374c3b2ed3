mod context;
mod data;
mod error;
mod request;
mod schema;
mod transport;
mod util;

pub mod config;
pub mod json_path;
pub mod logging;
pub mod stub_server;
pub mod test_data;
pub mod validate;

pub use config::{Configuration, ConfigurationBuilder};
pub use context::{ApiContext, ApiContextBuilder};
pub use data::{Method, RecordedRequest, ResponsePayload};
pub use error::{AssertionFailure, Error};
pub use request::RequestDescriptor;
pub use restcheck_codegen::api_test;
pub use schema::SchemaRegistry;
pub use stub_server::{StubRoute, StubServer};
pub use test_data::{Resource, TestDataPayload};
pub use transport::{ReqwestTransport, Transport};

#[doc(hidden)]
pub use tracing;
