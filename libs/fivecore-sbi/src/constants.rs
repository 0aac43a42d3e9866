//! SBI Constants
//!
//! HTTP status codes, methods, content types and the Nudm_SDM service and
//! resource names shared by the client and consumer crates.

/// Default HTTP port for SBI endpoints
pub const HTTP_PORT: u16 = 80;

/// HTTP Status Codes
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const REQUEST_TIMEOUT: u16 = 408;
    pub const CONFLICT: u16 = 409;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;
}

/// HTTP Methods
pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// API Versions
pub mod api {
    pub const V2: &str = "v2";
}

/// SBI Service Names
pub mod service {
    pub const NUDM_SDM: &str = "nudm-sdm";
}

/// Resource Names under /nudm-sdm/{version}/{supi}
pub mod resource {
    pub const AM_DATA: &str = "am-data";
    pub const UPU_ACK: &str = "upu-ack";
    pub const SMF_SELECT_DATA: &str = "smf-select-data";
    pub const UE_CONTEXT_IN_SMF_DATA: &str = "ue-context-in-smf-data";
    pub const NSSAI: &str = "nssai";
    pub const SDM_SUBSCRIPTIONS: &str = "sdm-subscriptions";
}

/// HTTP Headers
pub mod header {
    pub const ACCEPT: &str = "Accept";
    pub const CONTENT_TYPE: &str = "Content-Type";
}

/// Content Types
pub mod content_type {
    pub const APPLICATION_JSON: &str = "application/json";
    pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";
}

/// Query Parameters
pub mod param {
    pub const PLMN_ID: &str = "plmn-id";
}
