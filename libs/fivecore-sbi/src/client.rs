//! SBI HTTP/2 Client
//!
//! HTTP/2 client implementation using hyper for SBI communication. One
//! request per call, no retries; the request timeout is the only policy
//! applied here. TLS termination and producer discovery belong to the
//! deployment, not this client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::client::conn::http2::SendRequest;
use hyper::{Method, Request, Uri};
use hyper_util::rt::TokioIo;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::constants::method;
use crate::error::{SbiError, SbiResult};
use crate::message::{ResponseBody, SbiRequest, SbiResponse};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT: u64 = 5;
/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Characters percent-encoded in query keys and values. hyper's `Uri`
/// rejects the raw JSON delimiters a `plmn-id` parameter carries.
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'?');

/// The transport seam every SBI consumer goes through.
///
/// `send` issues exactly one request. `Ok` means a response was received,
/// whatever its status; `Err` means nothing interpretable came back.
#[async_trait]
pub trait SbiTransport: Send + Sync {
    async fn send(&self, request: SbiRequest) -> SbiResult<SbiResponse>;
}

/// SBI Client configuration: the producer's base address as resolved by
/// the caller, plus timeouts.
#[derive(Debug, Clone)]
pub struct SbiClientConfig {
    /// Target host (FQDN or IP)
    pub host: String,
    /// Target port
    pub port: u16,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for SbiClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: crate::constants::HTTP_PORT,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl SbiClientConfig {
    /// Create a new client configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the base URI
    pub fn base_uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// SBI Client - HTTP/2 client for SBI communication
pub struct SbiClient {
    /// Client configuration
    config: SbiClientConfig,
    /// Connection state (lazily initialized)
    connection: Arc<Mutex<Option<SendRequest<Full<Bytes>>>>>,
}

impl SbiClient {
    /// Create a new SBI client
    pub fn new(config: SbiClientConfig) -> Self {
        Self {
            config,
            connection: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client with host and port
    pub fn with_host_port(host: impl Into<String>, port: u16) -> Self {
        Self::new(SbiClientConfig::new(host, port))
    }

    /// Get the client configuration
    pub fn config(&self) -> &SbiClientConfig {
        &self.config
    }

    /// Connect to the server
    async fn connect(&self) -> SbiResult<SendRequest<Full<Bytes>>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let stream = tokio::time::timeout(self.config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| SbiError::Timeout)?
            .map_err(|e| SbiError::ConnectionError(e.to_string()))?;

        let io = TokioIo::new(stream);

        let (sender, conn) =
            hyper::client::conn::http2::handshake(hyper_util::rt::TokioExecutor::new(), io)
                .await
                .map_err(|e| SbiError::ConnectionError(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                log::warn!("HTTP/2 connection error: {e}");
            }
        });

        Ok(sender)
    }

    /// Get or create a connection
    async fn get_connection(&self) -> SbiResult<SendRequest<Full<Bytes>>> {
        let mut conn_guard = self.connection.lock().await;

        if let Some(ref sender) = *conn_guard {
            if sender.is_ready() {
                return Ok(sender.clone());
            }
        }

        let sender = self.connect().await?;
        *conn_guard = Some(sender.clone());
        Ok(sender)
    }

    /// Send an SBI request and receive a response
    pub async fn send_request(&self, request: SbiRequest) -> SbiResult<SbiResponse> {
        let mut sender = self.get_connection().await?;

        // Build the URI
        let uri_str = if request.header.uri.starts_with("http") {
            request.header.uri.clone()
        } else {
            format!("{}{}", self.config.base_uri(), request.header.uri)
        };
        let uri_with_params = append_params(uri_str, &request.http.params);

        let uri: Uri = uri_with_params
            .parse()
            .map_err(|e| SbiError::InvalidUri(format!("{uri_with_params}: {e}")))?;

        // Build the HTTP method
        let method = match request.header.method.as_str() {
            method::GET => Method::GET,
            method::POST => Method::POST,
            method::PUT => Method::PUT,
            method::DELETE => Method::DELETE,
            other => return Err(SbiError::InvalidMethod(other.to_string())),
        };

        // Build the request body
        let body = request
            .http
            .content
            .map(|c| Full::new(Bytes::from(c)))
            .unwrap_or_else(|| Full::new(Bytes::new()));

        let mut req_builder = Request::builder().method(method).uri(uri);
        for (key, value) in &request.http.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        let http_request = req_builder
            .body(body)
            .map_err(|e| SbiError::ClientError(e.to_string()))?;

        // Send the request with timeout
        let response = tokio::time::timeout(
            self.config.request_timeout,
            sender.send_request(http_request),
        )
        .await
        .map_err(|_| SbiError::Timeout)?
        .map_err(|e| SbiError::ConnectionError(e.to_string()))?;

        convert_response(response).await
    }
}

#[async_trait]
impl SbiTransport for SbiClient {
    async fn send(&self, request: SbiRequest) -> SbiResult<SbiResponse> {
        self.send_request(request).await
    }
}

/// Convert a hyper response into an SbiResponse with a collected body
async fn convert_response(response: hyper::Response<Incoming>) -> SbiResult<SbiResponse> {
    let status = response.status().as_u16();

    let mut headers = HashMap::new();
    for (key, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            headers.insert(key.to_string(), v.to_string());
        }
    }

    let body_bytes = response
        .into_body()
        .collect()
        .await
        .map_err(|e| SbiError::InvalidResponse(e.to_string()))?
        .to_bytes();

    let content = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).to_string())
    };

    Ok(SbiResponse {
        status,
        headers,
        body: ResponseBody::new(content),
    })
}

/// Append percent-encoded query parameters to a URI
fn append_params(uri: String, params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return uri;
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY_SET),
                utf8_percent_encode(v, QUERY_SET)
            )
        })
        .collect();
    format!("{}?{}", uri, encoded.join("&"))
}
