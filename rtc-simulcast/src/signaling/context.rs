use std::collections::{HashMap, HashSet};

use shared::error::{Error, Result};

use crate::sdp::description::{
    MediaContentDescription, MediaProtocolType, MediaType, RidDescription, RidDirection,
    RtpExtension, SDES_MID_URI, SDES_REPAIRED_RTP_STREAM_ID_URI, SDES_RTP_STREAM_ID_URI,
    SessionDescription, SimulcastDescription, SimulcastLayer, TransportDescription,
};

/// Everything needed to explode one simulcast video section of the local
/// offer and to fold the matching answer sections back into it.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SimulcastSectionInfo {
    /// Name of the simulcast section in the local offer.
    pub mid: String,
    pub media_protocol_type: MediaProtocolType,
    /// RIDs of the section in offer order. Never empty.
    pub rids: Vec<String>,
    /// Simulcast layering of the offer after send layers were made explicit.
    pub simulcast_description: SimulcastDescription,
    pub mid_extension: RtpExtension,
    pub rid_extension: RtpExtension,
    /// Captured for completeness only, it is neither sent nor restored.
    pub rrid_extension: RtpExtension,
    pub transport_description: TransportDescription,
}

impl SimulcastSectionInfo {
    /// The RID whose exploded section stands for the whole simulcast section.
    pub fn first_rid(&self) -> &str {
        self.rids.first().map(String::as_str).unwrap_or_default()
    }

    /// Makes the RIDs of the single stream of `media_desc` explicit send RIDs,
    /// declares one unpaused send layer per RID and captures the mid, rid and
    /// repaired-rid header extensions.
    fn analyze(
        mid: &str,
        media_protocol_type: MediaProtocolType,
        media_desc: &mut MediaContentDescription,
    ) -> Result<Self> {
        // Only single stream simulcast sections with rids are supported.
        let streams = media_desc.streams_mut();
        if streams.len() != 1 {
            return Err(Error::ErrSimulcastStreamCount(streams.len()));
        }
        let stream = &mut streams[0];
        if !stream.has_rids() {
            return Err(Error::ErrSimulcastStreamWithoutRids(mid.to_owned()));
        }

        let rids: Vec<String> = stream.rids().iter().map(|r| r.rid.clone()).collect();

        let mut simulcast_description = SimulcastDescription::default();
        let mut rid_descriptions = Vec::with_capacity(rids.len());
        for rid in &rids {
            rid_descriptions.push(RidDescription::new(rid, RidDirection::Send));
            simulcast_description
                .send_layers
                .add_layer(SimulcastLayer::new(rid, false));
        }
        stream.set_rids(rid_descriptions);
        media_desc.set_simulcast_description(simulcast_description.clone());

        let mut info = SimulcastSectionInfo {
            mid: mid.to_owned(),
            media_protocol_type,
            rids,
            simulcast_description,
            ..Default::default()
        };
        for extension in media_desc.rtp_header_extensions() {
            match extension.uri.as_str() {
                SDES_MID_URI => info.mid_extension = extension.clone(),
                SDES_RTP_STREAM_ID_URI => info.rid_extension = extension.clone(),
                SDES_REPAIRED_RTP_STREAM_ID_URI => info.rrid_extension = extension.clone(),
                _ => {}
            }
        }
        if info.rid_extension.id == 0 {
            return Err(Error::ErrSimulcastRidRtpExtensionRequired);
        }
        if info.mid_extension.id == 0 {
            return Err(Error::ErrSimulcastMidRtpExtensionRequired);
        }

        Ok(info)
    }
}

/// Per negotiation registry of the simulcast sections found in the local
/// offer. Built once by [`SignalingContext::fill`], read-only afterwards.
///
/// Lookups by section name and by RID go through indices into
/// `simulcast_infos`, every mid and every RID maps to exactly one info.
#[derive(Default, Debug, Clone)]
pub struct SignalingContext {
    mids_order: Vec<String>,
    simulcast_infos: Vec<SimulcastSectionInfo>,
    simulcast_infos_by_mid: HashMap<String, usize>,
    simulcast_infos_by_rid: HashMap<String, usize>,
}

impl SignalingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_simulcast(&self) -> bool {
        !self.simulcast_infos.is_empty()
    }

    /// Names of all sections of the original offer, in offer order.
    pub fn mids_order(&self) -> &[String] {
        &self.mids_order
    }

    pub fn simulcast_infos(&self) -> &[SimulcastSectionInfo] {
        &self.simulcast_infos
    }

    pub fn simulcast_info_by_mid(&self, mid: &str) -> Option<&SimulcastSectionInfo> {
        self.simulcast_infos_by_mid
            .get(mid)
            .map(|&index| &self.simulcast_infos[index])
    }

    pub fn simulcast_info_by_rid(&self, rid: &str) -> Option<&SimulcastSectionInfo> {
        self.simulcast_infos_by_rid
            .get(rid)
            .map(|&index| &self.simulcast_infos[index])
    }

    /// Registers `info`. Fails without touching the context if its mid or
    /// one of its RIDs is already known.
    pub fn add_simulcast_info(&mut self, info: SimulcastSectionInfo) -> Result<()> {
        if self.simulcast_infos_by_mid.contains_key(&info.mid) {
            return Err(Error::ErrSimulcastDuplicateMid(info.mid));
        }
        let mut seen = HashSet::new();
        for rid in &info.rids {
            if self.simulcast_infos_by_rid.contains_key(rid) || !seen.insert(rid.as_str()) {
                return Err(Error::ErrSimulcastDuplicateRid(rid.clone()));
            }
        }

        let index = self.simulcast_infos.len();
        self.simulcast_infos_by_mid.insert(info.mid.clone(), index);
        for rid in &info.rids {
            self.simulcast_infos_by_rid.insert(rid.clone(), index);
        }
        self.simulcast_infos.push(info);
        Ok(())
    }

    /// Scans the local offer: records the order of all its sections and
    /// registers one [`SimulcastSectionInfo`] per simulcast video section.
    ///
    /// The simulcast sections of `offer` are normalized in place, see
    /// [`SimulcastSectionInfo`].
    pub fn fill(&mut self, offer: &mut SessionDescription) -> Result<()> {
        for index in 0..offer.contents().len() {
            let content = &mut offer.contents_mut()[index];
            self.mids_order.push(content.mid.clone());

            let media_desc = &mut content.media_description;
            if media_desc.media_type() != MediaType::Video || !media_desc.has_simulcast() {
                continue;
            }

            let mut info =
                SimulcastSectionInfo::analyze(&content.mid, content.protocol, media_desc)?;

            info.transport_description = offer
                .get_transport_info_by_name(&info.mid)
                .map(|transport_info| transport_info.description.clone())
                .ok_or_else(|| Error::ErrSimulcastTransportInfoNotFound(info.mid.clone()))?;

            log::debug!(
                "simulcast section {} with rids {:?} (mid ext {}, rid ext {})",
                info.mid,
                info.rids,
                info.mid_extension.id,
                info.rid_extension.id
            );
            self.add_simulcast_info(info)?;
        }

        // Exploded sections are named after their RIDs. A RID may reuse the
        // name of its own section, which is gone once exploded.
        for info in &self.simulcast_infos {
            for rid in &info.rids {
                if self.mids_order.iter().any(|mid| mid == rid && mid != &info.mid) {
                    return Err(Error::ErrSdpDuplicateContentName(rid.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signaling::signaling_test::*;
    use shared::error::ErrorKind;

    #[test]
    fn test_fill_records_order_and_simulcast_sections() {
        let mut offer = simulcast_offer();
        let mut context = SignalingContext::new();
        context.fill(&mut offer.description).unwrap();

        assert_eq!(context.mids_order(), &["0", "v0", "2"]);
        assert!(context.has_simulcast());
        assert_eq!(context.simulcast_infos().len(), 1);

        let info = &context.simulcast_infos()[0];
        assert_eq!(info.mid, "v0");
        assert_eq!(info.rids, vec!["hi", "lo"]);
        assert_eq!(info.first_rid(), "hi");
        assert_eq!(info.mid_extension.id, 1);
        assert_eq!(info.rid_extension.id, 2);
        assert_eq!(info.rrid_extension.id, 3);
        assert_eq!(info.transport_description, transport("v0"));

        assert_eq!(context.simulcast_info_by_mid("v0"), Some(info));
        assert_eq!(context.simulcast_info_by_rid("lo"), Some(info));
        assert!(context.simulcast_info_by_rid("v0").is_none());
        assert!(context.simulcast_info_by_mid("0").is_none());
    }

    #[test]
    fn test_fill_normalizes_rids_and_send_layers() {
        let mut offer = simulcast_offer();
        // Implicit rids without any declared direction or paused layer.
        {
            let media = offer
                .description
                .get_content_by_name_mut("v0")
                .unwrap()
                .media_description_mut();
            media.streams_mut()[0].set_rids(vec![
                RidDescription::new("hi", RidDirection::Receive),
                RidDescription::new("lo", RidDirection::Receive),
            ]);
            let mut simulcast = SimulcastDescription::default();
            simulcast
                .send_layers
                .add_layer_with_alternatives(vec![SimulcastLayer::new("hi", true)]);
            simulcast
                .receive_layers
                .add_layer(SimulcastLayer::new("x", false));
            media.set_simulcast_description(simulcast);
        }

        let mut context = SignalingContext::new();
        context.fill(&mut offer.description).unwrap();

        let media = offer
            .description
            .get_content_by_name("v0")
            .unwrap()
            .media_description();
        assert_eq!(
            media.streams()[0].rids(),
            &[
                RidDescription::new("hi", RidDirection::Send),
                RidDescription::new("lo", RidDirection::Send),
            ]
        );
        assert_eq!(media.simulcast_description(), &send_layers(&["hi", "lo"]));
        assert_eq!(
            context.simulcast_infos()[0].simulcast_description,
            send_layers(&["hi", "lo"])
        );
    }

    #[test]
    fn test_fill_without_simulcast() {
        let mut offer = plain_offer();
        let mut context = SignalingContext::new();
        context.fill(&mut offer.description).unwrap();

        assert!(!context.has_simulcast());
        assert_eq!(context.mids_order(), &["0", "1"]);
        assert_eq!(offer, plain_offer());
    }

    #[test]
    fn test_fill_ignores_simulcast_on_audio() {
        let mut offer = plain_offer();
        {
            let media = offer
                .description
                .get_content_by_name_mut("0")
                .unwrap()
                .media_description_mut();
            media.set_simulcast_description(send_layers(&["a", "b"]));
        }

        let mut context = SignalingContext::new();
        context.fill(&mut offer.description).unwrap();
        assert!(!context.has_simulcast());
    }

    #[test]
    fn test_fill_rejects_malformed_sections() {
        let mut context = SignalingContext::new();
        let mut offer = simulcast_offer();
        offer
            .description
            .get_content_by_name_mut("v0")
            .unwrap()
            .media_description_mut()
            .streams_mut()
            .push(Default::default());
        let err = context.fill(&mut offer.description).unwrap_err();
        assert_eq!(err, Error::ErrSimulcastStreamCount(2));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let mut context = SignalingContext::new();
        let mut offer = simulcast_offer();
        offer
            .description
            .get_content_by_name_mut("v0")
            .unwrap()
            .media_description_mut()
            .streams_mut()[0]
            .set_rids(vec![]);
        assert_eq!(
            context.fill(&mut offer.description),
            Err(Error::ErrSimulcastStreamWithoutRids("v0".to_owned()))
        );

        let mut context = SignalingContext::new();
        let mut offer = simulcast_offer();
        offer.description.set_transport_infos(vec![]);
        assert_eq!(
            context.fill(&mut offer.description),
            Err(Error::ErrSimulcastTransportInfoNotFound("v0".to_owned()))
        );
    }

    #[test]
    fn test_fill_requires_mid_and_rid_extensions() {
        let tests = vec![
            (SDES_RTP_STREAM_ID_URI, Error::ErrSimulcastRidRtpExtensionRequired),
            (SDES_MID_URI, Error::ErrSimulcastMidRtpExtensionRequired),
        ];

        for (missing_uri, expected) in tests {
            let mut offer = simulcast_offer();
            {
                let media = offer
                    .description
                    .get_content_by_name_mut("v0")
                    .unwrap()
                    .media_description_mut();
                let extensions = media
                    .rtp_header_extensions()
                    .iter()
                    .filter(|ext| ext.uri != missing_uri)
                    .cloned()
                    .collect();
                media.set_rtp_header_extensions(extensions);
            }

            let mut context = SignalingContext::new();
            assert_eq!(context.fill(&mut offer.description), Err(expected));
        }
    }

    #[test]
    fn test_fill_rejects_rid_clashing_with_section_name() {
        let mut offer = simulcast_offer();
        offer
            .description
            .get_content_by_name_mut("v0")
            .unwrap()
            .media_description_mut()
            .streams_mut()[0]
            .set_rids(vec![
                RidDescription::new("hi", RidDirection::Send),
                RidDescription::new("2", RidDirection::Send),
            ]);

        let mut context = SignalingContext::new();
        assert_eq!(
            context.fill(&mut offer.description),
            Err(Error::ErrSdpDuplicateContentName("2".to_owned()))
        );
    }

    #[test]
    fn test_fill_accepts_rid_named_after_own_section() {
        use crate::signaling::answer::collapse_answer;
        use crate::signaling::candidate::{
            patch_answerer_ice_candidates, patch_offerer_ice_candidates,
        };
        use crate::signaling::offer::explode_offer;
        use crate::transport::ice::RTCIceCandidateInit;

        let mut offer = simulcast_offer();
        offer
            .description
            .get_content_by_name_mut("v0")
            .unwrap()
            .media_description_mut()
            .streams_mut()[0]
            .set_rids(vec![
                RidDescription::new("v0", RidDirection::Send),
                RidDescription::new("lo", RidDirection::Send),
            ]);

        let mut context = SignalingContext::new();
        context.fill(&mut offer.description).unwrap();
        assert_eq!(context.simulcast_info_by_rid("v0").map(|i| i.mid.as_str()), Some("v0"));

        let remote_offer = explode_offer(&context, &offer).unwrap();
        assert_eq!(remote_offer.description.content_names(), vec!["0", "2", "v0", "lo"]);
        assert_eq!(remote_offer.description.validate(), Ok(()));

        let local_answer = collapse_answer(&context, &mirror_answer(&remote_offer)).unwrap();
        assert_eq!(local_answer.description.content_names(), vec!["0", "v0", "2"]);
        assert_eq!(local_answer.description.validate(), Ok(()));
        assert_eq!(local_answer.description.transport_infos().len(), 3);

        let candidates = vec![RTCIceCandidateInit::new("v0", 1, HOST_CANDIDATE)];
        let outgoing = patch_offerer_ice_candidates(&context, &candidates).unwrap();
        assert_eq!(outgoing[0].sdp_mid(), Some("v0"));
        let incoming = patch_answerer_ice_candidates(&context, &outgoing).unwrap();
        assert_eq!(incoming[0].sdp_mid(), Some("v0"));
    }

    #[test]
    fn test_fill_reports_first_clashing_rid() {
        let mut offer = simulcast_offer();
        offer
            .description
            .get_content_by_name_mut("v0")
            .unwrap()
            .media_description_mut()
            .streams_mut()[0]
            .set_rids(vec![
                RidDescription::new("2", RidDirection::Send),
                RidDescription::new("0", RidDirection::Send),
            ]);

        for _ in 0..8 {
            let mut context = SignalingContext::new();
            assert_eq!(
                context.fill(&mut offer.clone().description),
                Err(Error::ErrSdpDuplicateContentName("2".to_owned()))
            );
        }
    }

    #[test]
    fn test_add_simulcast_info_rejects_collisions() {
        let info = |mid: &str, rids: &[&str]| SimulcastSectionInfo {
            mid: mid.to_owned(),
            rids: rids.iter().map(|rid| rid.to_string()).collect(),
            ..Default::default()
        };

        let mut context = SignalingContext::new();
        context.add_simulcast_info(info("v0", &["hi", "lo"])).unwrap();

        let err = context.add_simulcast_info(info("v0", &["a"])).unwrap_err();
        assert_eq!(err, Error::ErrSimulcastDuplicateMid("v0".to_owned()));
        assert_eq!(err.kind(), ErrorKind::InternalInconsistency);

        assert_eq!(
            context.add_simulcast_info(info("v1", &["a", "lo"])),
            Err(Error::ErrSimulcastDuplicateRid("lo".to_owned()))
        );
        assert_eq!(
            context.add_simulcast_info(info("v1", &["a", "a"])),
            Err(Error::ErrSimulcastDuplicateRid("a".to_owned()))
        );
        // Failed registrations leave nothing behind.
        assert!(context.simulcast_info_by_rid("a").is_none());
        assert!(context.simulcast_info_by_mid("v1").is_none());

        context.add_simulcast_info(info("v1", &["a", "b"])).unwrap();
        assert_eq!(context.simulcast_infos().len(), 2);
        assert_eq!(
            context.simulcast_info_by_rid("b").map(|i| i.mid.as_str()),
            Some("v1")
        );
    }
}
