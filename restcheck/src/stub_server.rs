//! A local HTTP server answering with canned responses.
//!
//! The server runs on its own thread and tokio runtime, binds an ephemeral port on the
//! loopback interface and records every request it receives. Dropping it shuts the
//! server down gracefully.

use crate::{
    data::{Method, RecordedRequest},
    error::Error,
    request::JSON_CONTENT_TYPE,
    util,
};
use futures::channel::oneshot;
use hyper::{
    body,
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    convert::Infallible,
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct StubRoute {
    method: Method,
    path: String,
    query: Option<String>,
    status_code: u16,
    headers: HashMap<String, String>,
    body: String,
    delay: Option<Duration>,
}

impl StubRoute {
    pub fn new<S: Into<String>>(method: Method, path: S) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            status_code: 200,
            headers: HashMap::new(),
            body: String::new(),
            delay: None,
        }
    }

    pub fn get<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete<S: Into<String>>(path: S) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Only match requests with exactly this query string.
    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_json_body(self, body: &Value) -> Self {
        self.with_header(
            "content-type",
            format!("{}; charset=utf-8", JSON_CONTENT_TYPE),
        )
        .with_body(body.to_string())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn matches(&self, method: &str, path: &str, query: Option<&str>) -> bool {
        self.method.as_str() == method
            && self.path == path
            && match &self.query {
                Some(expected) => query == Some(expected.as_str()),
                None => true,
            }
    }
}

#[derive(Debug)]
pub struct StubServer {
    address: SocketAddr,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(routes: Vec<StubRoute>) -> Result<Self, Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))?;
        listener.set_nonblocking(true)?;
        let address = listener.local_addr()?;

        let route_count = routes.len();
        let routes = Arc::new(routes);
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown, shutdown_signal) = oneshot::channel::<()>();
        let runtime = Runtime::new()?;

        let server = {
            let _guard = runtime.enter();
            let service_routes = routes.clone();
            let service_received = received.clone();

            Server::from_tcp(listener)?
                .serve(make_service_fn(move |_| {
                    let routes = service_routes.clone();
                    let received = service_received.clone();
                    async move {
                        Ok::<_, Infallible>(service_fn(move |request| {
                            handle_request(request, routes.clone(), received.clone())
                        }))
                    }
                }))
                .with_graceful_shutdown(async move {
                    let _ = shutdown_signal.await;
                })
        };

        let join_handle = thread::spawn(move || {
            if let Err(e) = runtime.block_on(server) {
                error!(error = %e, "stub server error");
            }
        });

        info!(address = %address, routes = route_count, "stub server started");

        Ok(Self {
            address,
            received,
            shutdown: Some(shutdown),
            join_handle: Some(join_handle),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Requests received so far, in arrival order.
    pub fn received_requests(&self) -> Vec<RecordedRequest> {
        match self.received.lock() {
            Ok(received) => received.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(join_handle) = self.join_handle.take() {
            if join_handle.join().is_err() {
                error!(address = %self.address, "couldn't gracefully shut down the stub server thread");
            }
        }
    }
}

async fn handle_request(
    request: Request<Body>,
    routes: Arc<Vec<StubRoute>>,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
) -> Result<Response<Body>, Infallible> {
    match respond(request, &routes, &received).await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(error = %e, "stub server couldn't answer");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            Ok(response)
        }
    }
}

async fn respond(
    request: Request<Body>,
    routes: &[StubRoute],
    received: &Mutex<Vec<RecordedRequest>>,
) -> Result<Response<Body>, Error> {
    let path = String::from(request.uri().path());
    let query = request.uri().query().map(String::from);
    let recorded = read_request_data(request).await?;

    let route = routes
        .iter()
        .find(|route| route.matches(&recorded.method, &path, query.as_deref()));
    debug!(method = %recorded.method, uri = %recorded.uri, matched = route.is_some(), "stub request");

    if let Ok(mut received) = received.lock() {
        received.push(recorded);
    }

    let route = match route {
        Some(route) => route,
        None => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::NOT_FOUND;
            return Ok(response);
        }
    };

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let mut response_builder = Response::builder().status(route.status_code);
    if let Some(headers_mut) = response_builder.headers_mut() {
        util::put_headers(headers_mut, &route.headers)?;
    }

    Ok(response_builder.body(route.body.clone().into())?)
}

async fn read_request_data(request: Request<Body>) -> Result<RecordedRequest, Error> {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let headers = util::extract_headers(request.headers());

    let body = body::to_bytes(request.into_body()).await?;

    Ok(RecordedRequest {
        method,
        uri,
        headers,
        body: String::from_utf8_lossy(&body).into(),
    })
}
