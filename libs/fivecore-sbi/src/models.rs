//! Nudm_SDM Data Models
//!
//! Wire documents exchanged with the UDM's SubscriberDataManagement
//! service. Shapes follow the published service interface (TS 29.503 /
//! TS 29.571); field presence mirrors what the UDM actually sends, so
//! almost everything is optional or defaulted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// PLMN identity, the home-network filter for most retrievals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnId {
    /// Mobile Country Code, 3 digits
    pub mcc: String,
    /// Mobile Network Code, 2 or 3 digits
    pub mnc: String,
}

impl PlmnId {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
        }
    }
}

/// Single Network Slice Selection Assistance Information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snssai {
    /// Slice/Service Type
    pub sst: u8,
    /// Slice Differentiator, 6 hex digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<String>,
}

impl Snssai {
    pub fn new(sst: u8) -> Self {
        Self { sst, sd: None }
    }

    pub fn with_sd(sst: u8, sd: impl Into<String>) -> Self {
        Self {
            sst,
            sd: Some(sd.into()),
        }
    }
}

/// Aggregate maximum bit rate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambr {
    pub uplink: String,
    pub downlink: String,
}

/// Access and mobility subscription data returned by GET .../am-data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessAndMobilitySubscriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<String>,
    /// Public identities, in the UDM's preferred order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gpsis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_ue_ambr: Option<Ambr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nssai: Option<Nssai>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rat_restrictions: Vec<String>,
}

/// Per-S-NSSAI session management selection info
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dnn_infos: Vec<DnnInfo>,
}

/// DNN entry within [`SnssaiInfo`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnInfo {
    pub dnn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dnn_indicator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lbo_roaming_allowed: Option<bool>,
}

/// SMF selection subscription data returned by GET .../smf-select-data.
///
/// `subscribed_snssai_infos` is keyed by the textual S-NSSAI; lookups are
/// case-insensitive, which is why the consumer folds the keys before
/// storing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmfSelectionSubscriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub subscribed_snssai_infos: HashMap<String, SnssaiInfo>,
}

/// One PDU session entry within [`UeContextInSmfData`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PduSession {
    pub dnn: String,
    pub smf_instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_id: Option<PlmnId>,
}

/// PGW-C/SMF combined-node info for interworking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PgwInfo {
    pub dnn: String,
    pub pgw_fqdn: String,
}

/// UE context in SMF data returned by GET .../ue-context-in-smf-data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UeContextInSmfData {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub pdu_sessions: HashMap<String, PduSession>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pgw_info: Vec<PgwInfo>,
}

/// Subscribed S-NSSAIs returned by GET .../nssai
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nssai {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_single_nssais: Vec<Snssai>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub single_nssais: Vec<Snssai>,
}

/// One entry of the subscriber record's accumulated slice selections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedSnssai {
    pub subscribed_snssai: Snssai,
    pub default_indication: bool,
}

/// SDM change-notification subscription, sent on POST and echoed back
/// with the remote-assigned `subscriptionId` on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdmSubscription {
    pub nf_instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_unsubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitored_resource_uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plmn_id: Option<PlmnId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

/// Acknowledgement of a UE parameters update, PUT .../am-data/upu-ack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sor_mac_iue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upu_mac_iue: Option<String>,
}

/// Problem Details - RFC 7807 error document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    /// A short, human-readable summary of the problem type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The HTTP status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Application-specific error cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// Invalid parameters
    #[serde(rename = "invalidParams", skip_serializing_if = "Option::is_none")]
    pub invalid_params: Option<Vec<InvalidParam>>,
}

impl ProblemDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: i32) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

/// Invalid Parameter for ProblemDetails
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvalidParam {
    /// Parameter name
    pub param: String,
    /// Reason why the parameter is invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
