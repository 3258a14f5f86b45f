pub(crate) mod client;
pub(crate) mod error;

pub use client::GoRestClient;
pub use error::{RemoteError, Result as ClientResult};
