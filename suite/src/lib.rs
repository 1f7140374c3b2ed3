//! Contract tests for the JSONPlaceholder fixture service, one module per resource.
//!
//! Every test talks to the live service and is ignored by default:
//! `cargo test -p placeholder-suite -- --ignored`. Point `RESTCHECK_CONFIG` at another
//! properties file to target a different deployment.

#[cfg(test)]
mod albums;
#[cfg(test)]
mod photos;
#[cfg(test)]
mod posts;
#[cfg(test)]
mod users;
