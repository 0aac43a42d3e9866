//! Nudm_SDM Consumer
//!
//! The subscriber data client. Each operation issues exactly one request
//! through the transport, classifies the result into success, structured
//! problem or transport failure, and on success folds the payload into
//! the caller's UE record via [`crate::nudm_handler`]. No retries and no
//! timeout policy live here; both belong to the caller and the transport.

use std::sync::Arc;

use uuid::Uuid;

use fivecore_sbi::constants::content_type;
use fivecore_sbi::models::{
    AccessAndMobilitySubscriptionData, Nssai, ProblemDetails, SdmSubscription,
    SmfSelectionSubscriptionData, UeContextInSmfData,
};
use fivecore_sbi::{SbiError, SbiRequest, SbiResponse, SbiTransport};

use crate::context::AmfUe;
use crate::error::{SdmError, SdmResult};
use crate::nudm_build;
use crate::nudm_handler;

/// AMF-side consumer of the UDM's SubscriberDataManagement service.
///
/// Holds the transport for one resolved UDM base address and this AMF's
/// NF instance identity, used to tag created subscriptions. The consumer
/// itself is stateless across calls; all per-subscriber state lives in
/// the caller-owned [`AmfUe`].
pub struct SdmConsumer {
    transport: Arc<dyn SbiTransport>,
    nf_instance_id: Uuid,
}

impl SdmConsumer {
    pub fn new(transport: Arc<dyn SbiTransport>, nf_instance_id: Uuid) -> Self {
        Self {
            transport,
            nf_instance_id,
        }
    }

    /// This AMF's NF instance identity
    pub fn nf_instance_id(&self) -> Uuid {
        self.nf_instance_id
    }

    /// Acknowledge a UE parameters update by confirming the received MAC.
    /// Pure side effect; nothing is written to the record.
    pub async fn put_upu_ack(&self, ue: &AmfUe, upu_mac_iue: &str) -> SdmResult {
        let request = nudm_build::build_upu_ack(&ue.supi, upu_mac_iue)?;
        let _response = self.exchange(&ue.supi, request).await?;
        Ok(())
    }

    /// Retrieve access and mobility subscription data, filtered by the
    /// home PLMN, and fold it into the record.
    pub async fn get_am_data(&self, ue: &mut AmfUe) -> SdmResult {
        let request = nudm_build::build_am_data_get(&ue.supi, &ue.home_plmn_id)?;
        let response = self.exchange(&ue.supi, request).await?;
        let data: AccessAndMobilitySubscriptionData =
            response.json_body().map_err(SbiError::from)?;
        nudm_handler::handle_am_data(ue, data);
        Ok(())
    }

    /// Retrieve SMF selection subscription data, filtered by the home
    /// PLMN, and fold it into the record with case-folded keys.
    pub async fn get_smf_select_data(&self, ue: &mut AmfUe) -> SdmResult {
        let request = nudm_build::build_smf_select_data_get(&ue.supi, &ue.home_plmn_id)?;
        let response = self.exchange(&ue.supi, request).await?;
        let data: SmfSelectionSubscriptionData = response.json_body().map_err(SbiError::from)?;
        nudm_handler::handle_smf_select_data(ue, data)
    }

    /// Retrieve UE context in SMF data, unfiltered, replacing the stored
    /// copy wholesale.
    pub async fn get_ue_context_in_smf_data(&self, ue: &mut AmfUe) -> SdmResult {
        let request = nudm_build::build_ue_context_in_smf_data_get(&ue.supi);
        let response = self.exchange(&ue.supi, request).await?;
        let data: UeContextInSmfData = response.json_body().map_err(SbiError::from)?;
        nudm_handler::handle_ue_context_in_smf_data(ue, data);
        Ok(())
    }

    /// Create a data-change subscription tagged with this AMF's instance
    /// id and the subscriber's home PLMN, storing the assigned
    /// subscription identifier.
    pub async fn subscribe(&self, ue: &mut AmfUe) -> SdmResult {
        let request = nudm_build::build_sdm_subscription_create(
            &ue.supi,
            self.nf_instance_id,
            &ue.home_plmn_id,
        )?;
        let response = self.exchange(&ue.supi, request).await?;
        let subscription: SdmSubscription = response.json_body().map_err(SbiError::from)?;
        nudm_handler::handle_sdm_subscription(ue, subscription);
        Ok(())
    }

    /// Retrieve slice selection subscription data, filtered by the home
    /// PLMN, appending to the record's slice sequence.
    pub async fn get_nssai(&self, ue: &mut AmfUe) -> SdmResult {
        let request = nudm_build::build_nssai_get(&ue.supi, &ue.home_plmn_id)?;
        let response = self.exchange(&ue.supi, request).await?;
        let nssai: Nssai = response.json_body().map_err(SbiError::from)?;
        nudm_handler::handle_nssai(ue, nssai);
        Ok(())
    }

    /// Delete the subscription created by [`subscribe`](Self::subscribe).
    /// The stored identifier is left in place; clearing it is the
    /// caller's responsibility.
    pub async fn unsubscribe(&self, ue: &AmfUe) -> SdmResult {
        let subscription_id = ue
            .sdm_subscription_id
            .as_deref()
            .ok_or(SdmError::NoSubscription)?;
        let request = nudm_build::build_sdm_subscription_delete(&ue.supi, subscription_id);
        let _response = self.exchange(&ue.supi, request).await?;
        Ok(())
    }

    /// Issue one request and classify the outcome. The same rule applies
    /// to every operation; success payload handling stays with the
    /// callers above. The response body is owned by the returned value or
    /// by `classify_failure`, and is released exactly once either way.
    async fn exchange(&self, supi: &str, request: SbiRequest) -> SdmResult<SbiResponse> {
        let method = request.header.method.clone();
        let uri = request.header.uri.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("[{supi}] {method} {uri}: no response ({e})");
                return Err(SdmError::NoResponse(e));
            }
        };

        if response.is_success() {
            Ok(response)
        } else {
            log::debug!("[{supi}] {method} {uri}: status {}", response.status);
            Err(classify_failure(response))
        }
    }
}

/// Classify a non-success response.
///
/// A ProblemDetails decode is attempted only when the response advertises
/// `application/problem+json`; anything else is a transport-level failure
/// carrying the raw status. A problem-typed body that does not decode is
/// also a transport failure, never a guessed problem.
fn classify_failure(mut response: SbiResponse) -> SdmError {
    let status = response.status;
    let is_problem = response
        .content_type()
        .is_some_and(|ct| ct.starts_with(content_type::APPLICATION_PROBLEM_JSON));
    let content = response.body.take();

    if is_problem {
        let content = content.unwrap_or_default();
        match serde_json::from_str::<ProblemDetails>(&content) {
            Ok(problem) => return SdmError::Problem(problem),
            Err(e) => {
                log::error!("Undecodable problem document (status {status}): {e}");
                return SdmError::Transport(SbiError::InvalidResponse(e.to_string()));
            }
        }
    }

    SdmError::Transport(SbiError::from_status(
        status,
        content.unwrap_or_else(|| "no body".to_string()),
    ))
}
