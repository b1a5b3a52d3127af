//! The external data boundary.
//!
//! [`RemoteDataPort`] is the capability callers depend on. [`HttpDataPort`]
//! satisfies it over HTTP; [`StubDataPort`] satisfies it in-process with a
//! configured outcome and a record of every call. Pick one at construction
//! time and hand it around as `Arc<dyn RemoteDataPort>`.

use async_trait::async_trait;

pub mod error;
pub mod http;
pub mod stub;

pub use error::FetchError;
pub use http::{HttpDataPort, HttpPortConfig};
pub use stub::{FetchCall, StubDataPort};

#[async_trait]
pub trait RemoteDataPort: Send + Sync {
    /// Fetches the remote payload. Failures are returned to the caller
    /// unchanged; implementations do not retry or recover.
    async fn fetch_data(&self) -> Result<String, FetchError>;
}
