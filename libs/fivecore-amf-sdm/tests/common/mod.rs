//! Scripted transport double for consumer tests
//!
//! Pops canned replies in order, records every request it sees, and
//! counts the responses it actually issued so tests can check that each
//! one was released exactly once.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fivecore_sbi::{SbiRequest, SbiResponse, SbiResult, SbiTransport};

/// Capture consumer logs in test output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One recorded outbound request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub params: HashMap<String, String>,
    pub content: Option<String>,
}

/// Transport double with a scripted reply queue
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<SbiResult<SbiResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    responses_issued: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply for the next request
    pub fn push_reply(&self, reply: SbiResult<SbiResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Everything sent through this transport, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests that were answered with an actual response
    /// (as opposed to a transport error with no response at all)
    pub fn responses_issued(&self) -> usize {
        self.responses_issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SbiTransport for ScriptedTransport {
    async fn send(&self, request: SbiRequest) -> SbiResult<SbiResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.header.method.clone(),
            uri: request.header.uri.clone(),
            params: request.http.params.clone(),
            content: request.http.content.clone(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport received a request with no scripted reply");
        if reply.is_ok() {
            self.responses_issued.fetch_add(1, Ordering::SeqCst);
        }
        reply
    }
}
