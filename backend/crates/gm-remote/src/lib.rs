//! HTTP client for the remote user API (GoREST).

pub(crate) mod client;

pub use client::{ClientResult, GoRestClient, RemoteError};
