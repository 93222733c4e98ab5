//! # AtomicAssets Client
//!
//! Async client for the AtomicAssets, AtomicMarket and AtomicTools indexer
//! APIs.
//!
//! Every call runs the same pipeline: encode the filter into a query string,
//! perform one round trip through a [`Transport`], check the content type,
//! surface declared API failures, then decode the
//! [`ApiResponse`](atomicasset_core::ApiResponse) envelope. There are no
//! retries; every failure ends the call.
//!
//! ```no_run
//! use atomicasset_client::{Client, ClientConfig};
//! use atomicasset_client::model::AssetsFilter;
//!
//! # async fn run() -> Result<(), atomicasset_client::ClientError> {
//! let client = Client::new(ClientConfig::new("https://wax.api.atomicassets.io"))?;
//! let filter = AssetsFilter {
//!     owner: "someaccount".to_string(),
//!     ..AssetsFilter::default()
//! };
//! let assets = client.assets(&filter).await?;
//! println!("{} assets", assets.data.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod transport;

pub use atomicasset_core::{model, ApiResponse, FilterSpec, QueryList, SortOrder, Timestamp};
pub use client::Client;
pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{ClientError, ErrorKind};
pub use reqwest::Method;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport for pipeline and endpoint tests.

    use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum Script {
        Reply(HttpResponse),
        Fail(String),
        Pending,
    }

    /// Records every request and answers with a fixed script.
    pub struct ScriptedTransport {
        script: Script,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn with(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn replying(response: HttpResponse) -> Arc<Self> {
            Self::with(Script::Reply(response))
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Self::with(Script::Fail(message.to_string()))
        }

        /// Never answers.
        pub fn pending() -> Arc<Self> {
            Self::with(Script::Pending)
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            match &self.script {
                Script::Reply(response) => Ok(response.clone()),
                Script::Fail(message) => Err(TransportError::new(message.clone())),
                Script::Pending => std::future::pending().await,
            }
        }
    }

    pub fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: "application/json".to_string(),
            body: body.as_bytes().to_vec(),
        }
    }
}
