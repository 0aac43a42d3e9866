//! FiveCore SBI (Service Based Interface) Library
//!
//! Client-side SBI plumbing for 5G core network functions: an HTTP/2
//! client, SBI request/response structures, and the Nudm_SDM data models.
//!
//! # Layout
//!
//! - [`client`] - HTTP/2 client and the [`SbiTransport`] seam
//! - [`message`] - SBI request/response structures
//! - [`models`] - Nudm_SDM wire documents (TS 29.503 / 29.571 subset)
//! - [`error`] - transport error types
//! - [`constants`] - service/resource names, content types, status codes

pub mod client;
pub mod constants;
pub mod error;
pub mod message;
pub mod models;

pub use client::{SbiClient, SbiClientConfig, SbiTransport};
pub use error::{SbiError, SbiResult};
pub use message::{ReleaseProbe, ResponseBody, SbiHeader, SbiHttpMessage, SbiRequest, SbiResponse};
pub use models::{
    AccessAndMobilitySubscriptionData, AcknowledgeInfo, Ambr, DnnInfo, InvalidParam, Nssai,
    PduSession, PgwInfo, PlmnId, ProblemDetails, SdmSubscription, SmfSelectionSubscriptionData,
    Snssai, SnssaiInfo, SubscribedSnssai, UeContextInSmfData,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_decodes_from_wire_form() {
        let json = r#"{"type":"urn:5gc:udm","title":"Not Found","status":404,"cause":"DATA_NOT_FOUND"}"#;
        let problem: ProblemDetails = serde_json::from_str(json).unwrap();
        assert_eq!(problem.problem_type.as_deref(), Some("urn:5gc:udm"));
        assert_eq!(problem.status, Some(404));
        assert_eq!(problem.cause.as_deref(), Some("DATA_NOT_FOUND"));
    }

    #[test]
    fn test_problem_content_type_distinguishable() {
        let problem = SbiResponse::with_status(404).with_body(
            r#"{"title":"Not Found"}"#,
            constants::content_type::APPLICATION_PROBLEM_JSON,
        );
        let plain = SbiResponse::with_status(404)
            .with_body("not found", "text/plain");

        assert_eq!(
            problem.content_type(),
            Some(constants::content_type::APPLICATION_PROBLEM_JSON)
        );
        assert_ne!(problem.content_type(), plain.content_type());
    }
}
