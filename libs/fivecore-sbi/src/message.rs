//! SBI Message Structures
//!
//! Request and response representations exchanged with an SBI producer.
//! The response body is a scoped resource: it is released exactly once,
//! when the owning [`ResponseBody`] is dropped, and a [`ReleaseProbe`] can
//! be attached so tests observe that every issued response was released.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{content_type, header};

/// SBI request header: method, URI and the parsed service path pieces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SbiHeader {
    /// HTTP method (GET, POST, PUT, DELETE)
    pub method: String,
    /// Request URI, relative to the producer's base address
    pub uri: String,
    /// Service name, e.g. "nudm-sdm"
    pub service_name: Option<String>,
    /// API version, e.g. "v2"
    pub api_version: Option<String>,
    /// Resource path components
    pub resource: Vec<String>,
}

impl SbiHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new header with method and URI
    pub fn with_method_uri(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Default::default()
        }
    }
}

/// Query parameters, headers and body carried by an SBI request.
#[derive(Debug, Clone, Default)]
pub struct SbiHttpMessage {
    /// Query parameters
    pub params: HashMap<String, String>,
    /// HTTP headers
    pub headers: HashMap<String, String>,
    /// Body content
    pub content: Option<String>,
}

impl SbiHttpMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query parameter
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Get a query parameter
    pub fn get_param(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Set a header
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Get a header
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }

    /// Set the body content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }
}

/// SBI Request
#[derive(Debug, Clone, Default)]
pub struct SbiRequest {
    /// Request header
    pub header: SbiHeader,
    /// HTTP message (params, headers, body)
    pub http: SbiHttpMessage,
}

impl SbiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GET request
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            header: SbiHeader::with_method_uri("GET", uri),
            http: SbiHttpMessage::new(),
        }
    }

    /// Create a POST request
    pub fn post(uri: impl Into<String>) -> Self {
        Self {
            header: SbiHeader::with_method_uri("POST", uri),
            http: SbiHttpMessage::new(),
        }
    }

    /// Create a PUT request
    pub fn put(uri: impl Into<String>) -> Self {
        Self {
            header: SbiHeader::with_method_uri("PUT", uri),
            http: SbiHttpMessage::new(),
        }
    }

    /// Create a DELETE request
    pub fn delete(uri: impl Into<String>) -> Self {
        Self {
            header: SbiHeader::with_method_uri("DELETE", uri),
            http: SbiHttpMessage::new(),
        }
    }

    /// Set JSON body content
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(body)?;
        self.http.set_content(json);
        self.http
            .set_header(header::CONTENT_TYPE, content_type::APPLICATION_JSON);
        Ok(self)
    }

    /// Add a query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.set_param(key, value);
        self
    }

    /// Add a header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.set_header(key, value);
        self
    }

    /// Tag the request with its service path pieces
    pub fn with_service(
        mut self,
        service_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        self.header.service_name = Some(service_name.into());
        self.header.api_version = Some(api_version.into());
        self
    }
}

/// Counts releases of [`ResponseBody`] resources.
///
/// Cloned into every response a test double issues; `releases()` must end
/// up equal to the number of responses issued, whatever outcome branch
/// each response went down.
#[derive(Debug, Clone, Default)]
pub struct ReleaseProbe(Arc<AtomicUsize>);

impl ReleaseProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of response bodies released so far
    pub fn releases(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn mark(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scoped response-body resource.
///
/// Owned by [`SbiResponse`]; the body is released when this value drops,
/// which the ownership rules make happen exactly once on every exit path.
#[derive(Debug, Default)]
pub struct ResponseBody {
    content: Option<String>,
    probe: Option<ReleaseProbe>,
}

impl ResponseBody {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content,
            probe: None,
        }
    }

    /// Borrow the body content, if any
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Move the body content out; the resource itself is still released
    /// when this value drops.
    pub fn take(&mut self) -> Option<String> {
        self.content.take()
    }
}

impl Drop for ResponseBody {
    fn drop(&mut self) {
        if let Some(probe) = &self.probe {
            probe.mark();
        }
    }
}

/// SBI Response
#[derive(Debug, Default)]
pub struct SbiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body resource
    pub body: ResponseBody,
}

impl SbiResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a response with status code
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Set body content and its content type
    pub fn with_body(mut self, content: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body.content = Some(content.into());
        self.headers
            .insert(header::CONTENT_TYPE.to_string(), content_type.into());
        self
    }

    /// Add a header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach a release probe to the body resource
    pub fn with_release_probe(mut self, probe: ReleaseProbe) -> Self {
        self.body.probe = Some(probe);
        self
    }

    /// Get a response header. Header names compare case-insensitively;
    /// hyper hands them over lowercased.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// The Content-Type header, if present
    pub fn content_type(&self) -> Option<&str> {
        self.header(header::CONTENT_TYPE)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the JSON body. An absent body decodes as an empty document.
    pub fn json_body<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        let content = self.body.content().unwrap_or("{}");
        serde_json::from_str(content)
    }
}
