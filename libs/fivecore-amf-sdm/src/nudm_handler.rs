//! Nudm_SDM Response Handlers
//!
//! Success-path merge rules: each handler folds one decoded document into
//! the UE record. Handlers never touch the network; failures here are
//! local hard errors and leave the record unmodified.

use std::collections::HashMap;

use fivecore_sbi::models::{
    AccessAndMobilitySubscriptionData, Nssai, SdmSubscription, SmfSelectionSubscriptionData,
    SubscribedSnssai, UeContextInSmfData,
};

use crate::context::AmfUe;
use crate::error::{SdmError, SdmResult};

/// Fold am-data into the record: wholesale replace, plus GPSI derivation.
///
/// GPSI selection policy: first-wins. The UDM returns GPSIs in its
/// preferred order, so the head of the list is the identity to expose. An
/// empty list leaves the stored GPSI untouched.
pub fn handle_am_data(ue: &mut AmfUe, data: AccessAndMobilitySubscriptionData) {
    if let Some(gpsi) = data.gpsis.first() {
        ue.gpsi = Some(gpsi.clone());
    }
    ue.am_data = Some(data);
    log::debug!("[{}] Stored access and mobility subscription data", ue.supi);
}

/// Fold smf-select-data into the record.
///
/// Lookups into `subscribedSnssaiInfos` are case-insensitive, so keys are
/// folded to lower case before storage. Two distinct keys folding onto
/// one entry would drop data, so that configuration is rejected and the
/// record is left as it was.
pub fn handle_smf_select_data(
    ue: &mut AmfUe,
    mut data: SmfSelectionSubscriptionData,
) -> SdmResult {
    if !data.subscribed_snssai_infos.is_empty() {
        let mut folded: HashMap<_, _> = HashMap::with_capacity(data.subscribed_snssai_infos.len());
        for (key, info) in data.subscribed_snssai_infos.drain() {
            let new_key = key.to_lowercase();
            if folded.contains_key(&new_key) {
                log::error!("[{}] Duplicate subscribed S-NSSAI key {}", ue.supi, new_key);
                return Err(SdmError::DuplicateSnssaiKey(new_key));
            }
            folded.insert(new_key, info);
        }
        data.subscribed_snssai_infos = folded;
    }
    ue.smf_sel_data = Some(data);
    log::debug!("[{}] Stored SMF selection subscription data", ue.supi);
    Ok(())
}

/// Fold ue-context-in-smf-data into the record: wholesale replace, so a
/// repeated fetch with an identical answer is idempotent.
pub fn handle_ue_context_in_smf_data(ue: &mut AmfUe, data: UeContextInSmfData) {
    ue.ue_context_in_smf_data = Some(data);
    log::debug!("[{}] Stored UE context in SMF data", ue.supi);
}

/// Append the fetched slice selections to the record, defaults first,
/// preserving the remote order within each group.
pub fn handle_nssai(ue: &mut AmfUe, nssai: Nssai) {
    for snssai in nssai.default_single_nssais {
        ue.subscribed_nssai.push(SubscribedSnssai {
            subscribed_snssai: snssai,
            default_indication: true,
        });
    }
    for snssai in nssai.single_nssais {
        ue.subscribed_nssai.push(SubscribedSnssai {
            subscribed_snssai: snssai,
            default_indication: false,
        });
    }
    log::debug!(
        "[{}] Subscribed NSSAI now has {} entries",
        ue.supi,
        ue.subscribed_nssai.len()
    );
}

/// Store the remote-assigned subscription identifier. A create response
/// without one stores nothing, so a later unsubscribe fails locally
/// instead of deleting an unnamed resource.
pub fn handle_sdm_subscription(ue: &mut AmfUe, subscription: SdmSubscription) {
    match subscription.subscription_id {
        Some(subscription_id) => {
            log::debug!("[{}] SDM subscription [{}]", ue.supi, subscription_id);
            ue.sdm_subscription_id = Some(subscription_id);
        }
        None => {
            log::warn!(
                "[{}] SDM subscription response carried no subscriptionId",
                ue.supi
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivecore_sbi::models::{PlmnId, Snssai, SnssaiInfo};

    fn test_ue() -> AmfUe {
        AmfUe::new("imsi-208930000000001", PlmnId::new("208", "93"))
    }

    #[test]
    fn test_am_data_first_gpsi_wins() {
        let mut ue = test_ue();
        let data = AccessAndMobilitySubscriptionData {
            gpsis: vec!["msisdn-0900000000".into(), "msisdn-0900000001".into()],
            ..Default::default()
        };
        handle_am_data(&mut ue, data);
        assert_eq!(ue.gpsi.as_deref(), Some("msisdn-0900000000"));
        assert!(ue.am_data.is_some());
    }

    #[test]
    fn test_am_data_empty_gpsis_keeps_previous() {
        let mut ue = test_ue();
        ue.gpsi = Some("msisdn-0900000000".into());
        handle_am_data(&mut ue, AccessAndMobilitySubscriptionData::default());
        assert_eq!(ue.gpsi.as_deref(), Some("msisdn-0900000000"));
    }

    #[test]
    fn test_smf_select_keys_folded_to_lowercase() {
        let mut ue = test_ue();
        let mut data = SmfSelectionSubscriptionData::default();
        data.subscribed_snssai_infos
            .insert("01ABCdef".into(), SnssaiInfo::default());
        data.subscribed_snssai_infos
            .insert("02010203".into(), SnssaiInfo::default());

        handle_smf_select_data(&mut ue, data).unwrap();

        let stored = &ue.smf_sel_data.as_ref().unwrap().subscribed_snssai_infos;
        assert_eq!(stored.len(), 2);
        assert!(stored.contains_key("01abcdef"));
        assert!(stored.contains_key("02010203"));
    }

    #[test]
    fn test_smf_select_duplicate_after_folding_rejected() {
        let mut ue = test_ue();
        let mut data = SmfSelectionSubscriptionData::default();
        data.subscribed_snssai_infos
            .insert("01ABCDEF".into(), SnssaiInfo::default());
        data.subscribed_snssai_infos
            .insert("01abcdef".into(), SnssaiInfo::default());

        let err = handle_smf_select_data(&mut ue, data).unwrap_err();
        assert!(matches!(err, SdmError::DuplicateSnssaiKey(ref k) if k == "01abcdef"));
        // No partial write
        assert!(ue.smf_sel_data.is_none());
    }

    #[test]
    fn test_nssai_defaults_appended_first() {
        let mut ue = test_ue();
        let nssai = Nssai {
            default_single_nssais: vec![Snssai::with_sd(1, "010203")],
            single_nssais: vec![Snssai::new(2), Snssai::with_sd(3, "ffffff")],
            ..Default::default()
        };
        handle_nssai(&mut ue, nssai);

        assert_eq!(ue.subscribed_nssai.len(), 3);
        assert!(ue.subscribed_nssai[0].default_indication);
        assert_eq!(ue.subscribed_nssai[0].subscribed_snssai.sst, 1);
        assert!(!ue.subscribed_nssai[1].default_indication);
        assert_eq!(ue.subscribed_nssai[1].subscribed_snssai.sst, 2);
        assert_eq!(ue.subscribed_nssai[2].subscribed_snssai.sst, 3);
    }

    #[test]
    fn test_nssai_appends_accumulate() {
        let mut ue = test_ue();
        let nssai = Nssai {
            default_single_nssais: vec![Snssai::new(1)],
            ..Default::default()
        };
        handle_nssai(&mut ue, nssai.clone());
        handle_nssai(&mut ue, nssai);
        assert_eq!(ue.subscribed_nssai.len(), 2);
    }

    #[test]
    fn test_subscription_id_stored() {
        let mut ue = test_ue();
        handle_sdm_subscription(
            &mut ue,
            SdmSubscription {
                subscription_id: Some("sub-42".into()),
                ..Default::default()
            },
        );
        assert_eq!(ue.sdm_subscription_id.as_deref(), Some("sub-42"));
    }

    #[test]
    fn test_subscription_without_id_stores_nothing() {
        let mut ue = test_ue();
        handle_sdm_subscription(&mut ue, SdmSubscription::default());
        assert!(ue.sdm_subscription_id.is_none());
    }
}
