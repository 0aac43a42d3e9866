//! AMF UE Context
//!
//! The caller-owned per-UE record this crate's consumer populates. The
//! record holds at most one copy of each retrieved document plus the
//! accumulating slice-selection sequence; nothing here is persisted.

use fivecore_sbi::models::{
    AccessAndMobilitySubscriptionData, PlmnId, SmfSelectionSubscriptionData, SubscribedSnssai,
    UeContextInSmfData,
};

/// Per-UE subscriber record.
///
/// Field ownership: the SDM consumer writes the fields below on successful
/// operations and never reads back anything except `supi`, `home_plmn_id`
/// and `sdm_subscription_id`. The caller owns the record and must
/// serialize operations against one UE; operations for different UEs may
/// run concurrently. No lock lives here.
#[derive(Debug, Clone, Default)]
pub struct AmfUe {
    /// SUPI - the path key for every SDM call, immutable for the session
    pub supi: String,
    /// Home PLMN, used as the retrieval filter
    pub home_plmn_id: PlmnId,
    /// Derived public identity. Written by the am-data retrieval under the
    /// first-wins GPSI selection policy.
    pub gpsi: Option<String>,
    /// Access and mobility subscription data, replaced wholesale
    pub am_data: Option<AccessAndMobilitySubscriptionData>,
    /// SMF selection data, keys case-folded before storage
    pub smf_sel_data: Option<SmfSelectionSubscriptionData>,
    /// UE context in SMF data, replaced wholesale
    pub ue_context_in_smf_data: Option<UeContextInSmfData>,
    /// Accumulated slice selections; append-only, defaults first per fetch
    pub subscribed_nssai: Vec<SubscribedSnssai>,
    /// Set by subscribe, consumed by unsubscribe. Never cleared by this
    /// crate; an explicit clear is the caller's call.
    pub sdm_subscription_id: Option<String>,
}

impl AmfUe {
    /// Create a record for a subscriber identity
    pub fn new(supi: impl Into<String>, home_plmn_id: PlmnId) -> Self {
        Self {
            supi: supi.into(),
            home_plmn_id,
            ..Default::default()
        }
    }
}
