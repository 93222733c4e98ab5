//! The request pipeline shared by every endpoint.

use crate::config::{normalize_base_url, ClientConfig};
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use atomicasset_core::{
    is_content_type, is_error_status, ApiErrorBody, ApiResponse, FilterSpec, JSON_CONTENT_TYPE,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Client for an AtomicAssets indexer.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    host: Option<String>,
    context: RequestContext,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] if the base URL is invalid or the HTTP
    /// client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] if the base URL is invalid.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.base_url)?;

        Ok(Self {
            base_url,
            host: config.host,
            context: RequestContext::default(),
            transport,
        })
    }

    /// A copy of this client whose calls observe `context`.
    #[must_use]
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    /// Base URL every path is joined to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Host` header override, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Context applied to every call.
    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Perform one call and decode the envelope.
    ///
    /// `path` is appended to the base URL as is; callers escape any
    /// user-supplied segments. The returned envelope always carries the HTTP
    /// status, including for failure statuses without a structured error
    /// body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Encode`] if the filter cannot be encoded
    /// - [`ClientError::Transport`] if no response was obtained
    /// - [`ClientError::ContentType`] if the response is not JSON
    /// - [`ClientError::Api`] if the service declared `success: false` with a
    ///   failure status
    /// - [`ClientError::Decode`] if the body does not decode into `T`
    pub async fn call<F, T>(
        &self,
        method: Method,
        path: &str,
        filter: Option<&F>,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        F: FilterSpec + ?Sized,
        T: DeserializeOwned + Default,
    {
        let query = match filter {
            Some(filter) => filter.to_query()?.to_query_string(),
            None => String::new(),
        };

        let mut headers = Vec::new();
        if let Some(host) = &self.host {
            headers.push(("Host".to_string(), host.clone()));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            query,
            headers,
        };

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            query = %request.query,
            "Sending request"
        );

        let response = self
            .context
            .run(self.transport.round_trip(request))
            .await?;
        let status = response.status;

        tracing::debug!(status, path, "Received response");

        if !is_content_type(&response.content_type, JSON_CONTENT_TYPE) {
            return Err(ClientError::ContentType {
                found: response.content_type,
                status,
            });
        }

        if is_error_status(status) {
            if let Ok(body) = serde_json::from_slice::<ApiErrorBody>(&response.body) {
                if body.declares_failure() {
                    let message = body.message.unwrap_or_default();
                    tracing::warn!(status, path, %message, "API reported failure");
                    return Err(ClientError::Api { status, message });
                }
            }
        }

        let mut decoded: ApiResponse<T> = serde_json::from_slice(&response.body)
            .map_err(|source| ClientError::Decode { source, status })?;
        decoded.http_status = status;
        Ok(decoded)
    }

    /// `GET` with an optional filter.
    pub(crate) async fn get<F, T>(
        &self,
        path: &str,
        filter: Option<&F>,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        F: FilterSpec + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.call(Method::GET, path, filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{json_response, ScriptedTransport};
    use crate::transport::HttpResponse;
    use atomicasset_core::model::HealthData;
    use serde_json::json;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    fn client(transport: &Arc<ScriptedTransport>) -> Client {
        Client::with_transport(ClientConfig::default(), transport.clone()).unwrap()
    }

    #[tokio::test]
    async fn decodes_envelope_and_records_status() {
        let transport = ScriptedTransport::replying(json_response(
            200,
            r#"{"success":true,"data":{"version":"1.0.0"},"query_time":"1646996870500"}"#,
        ));
        let resp: ApiResponse<HealthData> = client(&transport)
            .get::<(), _>("/health", None)
            .await
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.http_status, 200);
        assert_eq!(resp.data.version, "1.0.0");
        assert_eq!(resp.query_time.as_epoch_millis(), 1_646_996_870_500);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url, "http://localhost:9000/health");
        assert!(sent.query.is_empty());
        assert!(sent.header("host").is_none());
    }

    #[tokio::test]
    async fn appends_encoded_query() {
        let transport = ScriptedTransport::replying(json_response(200, r#"{"success":true}"#));
        let filter = json!({"ids": ["1", "2", "3"], "owner": "", "limit": 5});

        let _: ApiResponse<Vec<serde_json::Value>> = client(&transport)
            .get("/atomicassets/v1/assets", Some(&filter))
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query, "ids=1%2C2%2C3&limit=5");
    }

    #[tokio::test]
    async fn sends_host_override() {
        let transport = ScriptedTransport::replying(json_response(200, "{}"));
        let client = Client::with_transport(
            ClientConfig::default().with_host("my-custom-host"),
            transport.clone(),
        )
        .unwrap();

        let _: ApiResponse<HealthData> = client.get::<(), _>("/health", None).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Host"), Some("my-custom-host"));
    }

    #[tokio::test]
    async fn rejects_non_json_content_type() {
        let transport = ScriptedTransport::replying(HttpResponse {
            status: 200,
            content_type: "text/plain".to_string(),
            body: b"{}".to_vec(),
        });
        let err = client(&transport)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ContentType);
        assert_eq!(
            err.to_string(),
            "invalid content-type 'text/plain', expected 'application/json'"
        );
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn accepts_charset_parameter() {
        let transport = ScriptedTransport::replying(HttpResponse {
            status: 200,
            content_type: "application/json; charset=utf-8".to_string(),
            body: br#"{"success":true}"#.to_vec(),
        });
        let resp: ApiResponse<HealthData> =
            client(&transport).get::<(), _>("/health", None).await.unwrap();
        assert!(resp.success);
    }

    #[tokio::test]
    async fn surfaces_declared_api_failure() {
        let transport = ScriptedTransport::replying(json_response(
            500,
            r#"{"success":false,"message":"Some internal error"}"#,
        ));
        let err = client(&transport)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.to_string(), "API Error: Some internal error");
        assert!(matches!(
            err,
            ClientError::Api { status: 500, ref message } if message == "Some internal error"
        ));
    }

    #[tokio::test]
    async fn status_only_failure_is_not_an_error() {
        let transport = ScriptedTransport::replying(json_response(404, "{}"));
        let resp: ApiResponse<HealthData> =
            client(&transport).get::<(), _>("/health", None).await.unwrap();

        assert_eq!(resp.http_status, 404);
        assert!(resp.is_error());
        assert!(!resp.success);
        assert_eq!(resp.data, HealthData::default());
    }

    #[tokio::test]
    async fn failure_status_with_success_true_falls_through() {
        let transport = ScriptedTransport::replying(json_response(
            502,
            r#"{"success":true,"message":"odd"}"#,
        ));
        let resp: ApiResponse<HealthData> =
            client(&transport).get::<(), _>("/health", None).await.unwrap();
        assert_eq!(resp.http_status, 502);
        assert_eq!(resp.message.as_deref(), Some("odd"));
    }

    #[tokio::test]
    async fn empty_body_is_decode_error() {
        let transport = ScriptedTransport::replying(json_response(200, ""));
        let err = client(&transport)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(200));
        assert!(err.to_string().contains("EOF"), "{err}");
    }

    #[tokio::test]
    async fn empty_body_with_failure_status_is_decode_error() {
        let transport = ScriptedTransport::replying(json_response(404, ""));
        let err = client(&transport)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn bare_string_filter_is_bad_input() {
        let transport = ScriptedTransport::replying(json_response(200, "{}"));
        let filter = json!("some-string");
        let err = client(&transport)
            .get::<_, HealthData>("/atomicassets/v1/assets", Some(&filter))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadInput);
        assert_eq!(err.to_string(), "expects object input, got string");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn deadline_ends_pending_call() {
        let transport = ScriptedTransport::pending();
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(20));
        let err = client(&transport)
            .with_context(ctx)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("deadline exceeded"), "{err}");
    }

    #[tokio::test]
    async fn cancellation_ends_pending_call() {
        let transport = ScriptedTransport::pending();
        let token = CancellationToken::new();
        let client = client(&transport)
            .with_context(RequestContext::new().with_cancellation(token.clone()));

        let call = tokio::spawn(async move {
            client.get::<(), HealthData>("/health", None).await
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();

        let err = call.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "context canceled");
    }

    #[tokio::test]
    async fn transport_message_is_kept() {
        let transport = ScriptedTransport::failing("dial tcp 127.0.0.1:1: connect: connection refused");
        let err = client(&transport)
            .get::<(), HealthData>("/health", None)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "dial tcp 127.0.0.1:1: connect: connection refused"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let transport = ScriptedTransport::pending();
        let err = Client::with_transport(ClientConfig::new("localhost"), transport).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Init);
    }

    #[test]
    fn with_context_keeps_settings() {
        let transport = ScriptedTransport::pending();
        let base = Client::with_transport(
            ClientConfig::new("https://wax.api.atomicassets.io/").with_host("h"),
            transport,
        )
        .unwrap();
        let derived = base.with_context(RequestContext::new().with_timeout(Duration::from_secs(1)));

        assert_eq!(derived.base_url(), "https://wax.api.atomicassets.io");
        assert_eq!(derived.host(), Some("h"));
        assert!(derived.context().deadline().is_some());
        assert!(base.context().deadline().is_none());
    }
}
