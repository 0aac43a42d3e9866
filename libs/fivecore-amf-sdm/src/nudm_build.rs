//! Nudm_SDM Request Builders
//!
//! One pure builder per SDM operation. Builders only assemble the
//! request; dispatch and outcome classification live in [`crate::consumer`].

use uuid::Uuid;

use fivecore_sbi::constants::{api, content_type, header, param, resource, service};
use fivecore_sbi::models::{AcknowledgeInfo, PlmnId, SdmSubscription};
use fivecore_sbi::{SbiRequest, SbiResult};

/// Path under the producer's base address for one subscriber's resource
fn sdm_path(supi: &str, resources: &[&str]) -> String {
    let mut path = format!("/{}/{}/{}", service::NUDM_SDM, api::V2, supi);
    for component in resources {
        path.push('/');
        path.push_str(component);
    }
    path
}

/// The home-network filter, carried as a JSON-marshalled query value
fn plmn_id_param(plmn_id: &PlmnId) -> SbiResult<String> {
    Ok(serde_json::to_string(plmn_id)?)
}

/// PUT /{supi}/am-data/upu-ack
pub fn build_upu_ack(supi: &str, upu_mac_iue: &str) -> SbiResult<SbiRequest> {
    let ack_info = AcknowledgeInfo {
        upu_mac_iue: Some(upu_mac_iue.to_string()),
        ..Default::default()
    };
    let request = SbiRequest::put(sdm_path(supi, &[resource::AM_DATA, resource::UPU_ACK]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_json_body(&ack_info)?;
    Ok(request)
}

/// GET /{supi}/am-data?plmn-id=...
pub fn build_am_data_get(supi: &str, plmn_id: &PlmnId) -> SbiResult<SbiRequest> {
    let request = SbiRequest::get(sdm_path(supi, &[resource::AM_DATA]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_param(param::PLMN_ID, plmn_id_param(plmn_id)?)
        .with_header(header::ACCEPT, content_type::APPLICATION_JSON);
    Ok(request)
}

/// GET /{supi}/smf-select-data?plmn-id=...
pub fn build_smf_select_data_get(supi: &str, plmn_id: &PlmnId) -> SbiResult<SbiRequest> {
    let request = SbiRequest::get(sdm_path(supi, &[resource::SMF_SELECT_DATA]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_param(param::PLMN_ID, plmn_id_param(plmn_id)?)
        .with_header(header::ACCEPT, content_type::APPLICATION_JSON);
    Ok(request)
}

/// GET /{supi}/ue-context-in-smf-data, unfiltered
pub fn build_ue_context_in_smf_data_get(supi: &str) -> SbiRequest {
    SbiRequest::get(sdm_path(supi, &[resource::UE_CONTEXT_IN_SMF_DATA]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_header(header::ACCEPT, content_type::APPLICATION_JSON)
}

/// POST /{supi}/sdm-subscriptions
pub fn build_sdm_subscription_create(
    supi: &str,
    nf_instance_id: Uuid,
    plmn_id: &PlmnId,
) -> SbiResult<SbiRequest> {
    let subscription = SdmSubscription {
        nf_instance_id: nf_instance_id.to_string(),
        plmn_id: Some(plmn_id.clone()),
        ..Default::default()
    };
    let request = SbiRequest::post(sdm_path(supi, &[resource::SDM_SUBSCRIPTIONS]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_json_body(&subscription)?;
    Ok(request)
}

/// GET /{supi}/nssai?plmn-id=...
pub fn build_nssai_get(supi: &str, plmn_id: &PlmnId) -> SbiResult<SbiRequest> {
    let request = SbiRequest::get(sdm_path(supi, &[resource::NSSAI]))
        .with_service(service::NUDM_SDM, api::V2)
        .with_param(param::PLMN_ID, plmn_id_param(plmn_id)?)
        .with_header(header::ACCEPT, content_type::APPLICATION_JSON);
    Ok(request)
}

/// DELETE /{supi}/sdm-subscriptions/{subscriptionId}
pub fn build_sdm_subscription_delete(supi: &str, subscription_id: &str) -> SbiRequest {
    SbiRequest::delete(sdm_path(supi, &[resource::SDM_SUBSCRIPTIONS, subscription_id]))
        .with_service(service::NUDM_SDM, api::V2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPI: &str = "imsi-208930000000001";

    #[test]
    fn test_sdm_path() {
        assert_eq!(
            sdm_path(SUPI, &[resource::AM_DATA]),
            "/nudm-sdm/v2/imsi-208930000000001/am-data"
        );
        assert_eq!(
            sdm_path(SUPI, &[resource::AM_DATA, resource::UPU_ACK]),
            "/nudm-sdm/v2/imsi-208930000000001/am-data/upu-ack"
        );
    }

    #[test]
    fn test_build_am_data_get() {
        let request = build_am_data_get(SUPI, &PlmnId::new("208", "93")).unwrap();
        assert_eq!(request.header.method, "GET");
        assert_eq!(request.header.uri, "/nudm-sdm/v2/imsi-208930000000001/am-data");
        assert_eq!(
            request.http.get_param(param::PLMN_ID).map(String::as_str),
            Some(r#"{"mcc":"208","mnc":"93"}"#)
        );
    }

    #[test]
    fn test_build_upu_ack_body() {
        let request = build_upu_ack(SUPI, "9f2ec4b1").unwrap();
        assert_eq!(request.header.method, "PUT");
        assert!(request.header.uri.ends_with("/am-data/upu-ack"));

        let body = request.http.content.as_deref().unwrap();
        assert_eq!(body, r#"{"upuMacIue":"9f2ec4b1"}"#);
    }

    #[test]
    fn test_build_subscription_create_tags_nf_instance() {
        let nf_instance_id = Uuid::new_v4();
        let request =
            build_sdm_subscription_create(SUPI, nf_instance_id, &PlmnId::new("208", "93")).unwrap();
        assert_eq!(request.header.method, "POST");
        assert!(request.header.uri.ends_with("/sdm-subscriptions"));

        let body: SdmSubscription =
            serde_json::from_str(request.http.content.as_deref().unwrap()).unwrap();
        assert_eq!(body.nf_instance_id, nf_instance_id.to_string());
        assert_eq!(body.plmn_id.unwrap(), PlmnId::new("208", "93"));
        assert!(body.subscription_id.is_none());
    }

    #[test]
    fn test_build_subscription_delete_uses_stored_id() {
        let request = build_sdm_subscription_delete(SUPI, "sub-42");
        assert_eq!(request.header.method, "DELETE");
        assert_eq!(
            request.header.uri,
            "/nudm-sdm/v2/imsi-208930000000001/sdm-subscriptions/sub-42"
        );
    }

    #[test]
    fn test_build_ue_context_in_smf_data_has_no_filter() {
        let request = build_ue_context_in_smf_data_get(SUPI);
        assert!(request.http.params.is_empty());
        assert!(request.header.uri.ends_with("/ue-context-in-smf-data"));
    }
}
