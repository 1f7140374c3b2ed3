use crate::{
    config::Configuration,
    data::ResponsePayload,
    error::Error,
    request::RequestDescriptor,
    util,
};
use reqwest::{blocking::Client, header::HeaderMap};
use std::{fmt::Debug, time::Instant};
use tracing::{debug, info};

/// Sends a descriptor and waits for the complete response.
pub trait Transport: Debug {
    fn send(&self, base_url: &str, request: &RequestDescriptor) -> Result<ResponsePayload, Error>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    log_requests: bool,
    log_responses: bool,
}

impl ReqwestTransport {
    /// Builds a blocking client that gives up after the configured timeout.
    pub fn new(configuration: &Configuration) -> Result<Self, Error> {
        let client = Client::builder().timeout(configuration.timeout()).build()?;

        Ok(Self {
            client,
            log_requests: configuration.should_log_requests(),
            log_responses: configuration.should_log_responses(),
        })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, base_url: &str, request: &RequestDescriptor) -> Result<ResponsePayload, Error> {
        let url = request.url(base_url);
        let mut headers = HeaderMap::new();
        util::put_headers(&mut headers, &request.headers)?;

        let mut request_builder = self
            .client
            .request(request.method.into(), url.as_str())
            .headers(headers);

        if let Some(query_params) = &request.query_params {
            request_builder = request_builder.query(query_params);
        }

        let body = request.body.as_ref().map(|body| body.to_string());
        if let Some(body) = &body {
            request_builder = request_builder.body(body.clone());
        }

        if self.log_requests {
            info!(method = %request.method, url = %url, query = ?request.query_params, "request");
            debug!(headers = ?request.headers, body = body.as_deref().unwrap_or(""), "request detail");
        }

        let started = Instant::now();
        let response = request_builder.send()?;
        let status_code = response.status().as_u16();
        let headers = util::extract_headers(response.headers());
        let raw_body = response.text()?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if self.log_responses {
            info!(method = %request.method, url = %url, status_code, elapsed_ms, "response");
            debug!(headers = ?headers, body = %raw_body, "response detail");
        }

        Ok(ResponsePayload::new(status_code, headers, raw_body, elapsed_ms))
    }
}
