use std::collections::HashMap;

use shared::error::{Error, Result};

use super::bundle_all_contents;
use super::context::{SignalingContext, SimulcastSectionInfo};
use super::order::restore_media_sections_order;
use crate::sdp::RTCSessionDescription;
use crate::sdp::description::{
    MediaContentDescription, RidDescription, RidDirection, RtpExtension, SDES_MID_URI,
    SDES_REPAIRED_RTP_STREAM_ID_URI, SDES_RTP_STREAM_ID_URI, SessionDescription,
    SimulcastDescription, StreamParams, TransportDescription, TransportInfo,
};

/// Builds the answer applied locally from the answer the remote peer gave to
/// an exploded offer: the RID sections of every simulcast section collapse
/// back into one section receiving all RIDs, placed where the simulcast
/// section was in the original offer.
pub(crate) fn collapse_answer(
    context: &SignalingContext,
    answer: &RTCSessionDescription,
) -> Result<RTCSessionDescription> {
    let mut desc = answer.description.clone();

    for info in context.simulcast_infos() {
        let first_rid = info.first_rid();
        let mut media_desc = desc
            .get_content_by_name(first_rid)
            .map(|content| content.media_description().clone())
            .ok_or_else(|| Error::ErrSectionNotFound(first_rid.to_owned()))?;

        for rid in &info.rids {
            if !desc.remove_content_by_name(rid) {
                return Err(Error::ErrSectionNotFound(rid.clone()));
            }
        }

        make_simulcast_answer(info, &mut media_desc)?;
        desc.add_content(&info.mid, info.media_protocol_type, media_desc);
        log::debug!("collapsed {:?} into simulcast section {}", info.rids, info.mid);
    }

    let mut desc = restore_media_sections_order(context.mids_order(), desc)?;

    bundle_all_contents(&mut desc);
    merge_transport_infos(context, &mut desc)?;

    Ok(RTCSessionDescription::answer(
        desc,
        &answer.session_id,
        &answer.session_version,
    ))
}

/// Restores the offer side mid and rid header extensions, receives every RID
/// of `info` and mirrors the send layers of the offer as receive layers.
///
/// repaired-rid is not restored: rtx is not supported in simulcast.
fn make_simulcast_answer(
    info: &SimulcastSectionInfo,
    media_desc: &mut MediaContentDescription,
) -> Result<()> {
    let mut extensions: Vec<RtpExtension> = media_desc
        .rtp_header_extensions()
        .iter()
        .filter(|ext| {
            ext.uri != SDES_MID_URI
                && ext.uri != SDES_RTP_STREAM_ID_URI
                && ext.uri != SDES_REPAIRED_RTP_STREAM_ID_URI
        })
        .cloned()
        .collect();
    extensions.push(info.mid_extension.clone());
    extensions.push(info.rid_extension.clone());
    media_desc.clear_rtp_header_extensions();
    media_desc.set_rtp_header_extensions(extensions);

    if !media_desc.streams().is_empty() {
        return Err(Error::ErrSimulcastAnswerHasStreams(
            info.first_rid().to_owned(),
        ));
    }
    let mut stream_params = StreamParams::default();
    stream_params.set_rids(
        info.rids
            .iter()
            .map(|rid| RidDescription::new(rid, RidDirection::Receive))
            .collect(),
    );
    media_desc.streams_mut().push(stream_params);

    let mut simulcast_description = SimulcastDescription::default();
    for layer in &info.simulcast_description.send_layers {
        simulcast_description
            .receive_layers
            .add_layer_with_alternatives(layer.clone());
    }
    media_desc.set_simulcast_description(simulcast_description);

    Ok(())
}

/// Replaces the transport infos of the RID sections of every simulcast
/// section by a single one named after the simulcast section.
///
/// All RID sections of one simulcast section alias the same transport; when
/// they disagree the last one listed wins.
fn merge_transport_infos(context: &SignalingContext, desc: &mut SessionDescription) -> Result<()> {
    let mut transport_infos = Vec::with_capacity(desc.transport_infos().len());
    let mut mid_to_transport_description: HashMap<&str, TransportDescription> = HashMap::new();

    for transport_info in desc.transport_infos() {
        match context.simulcast_info_by_rid(&transport_info.content_name) {
            Some(info) => {
                if let Some(previous) = mid_to_transport_description
                    .insert(info.mid.as_str(), transport_info.description.clone())
                {
                    if previous != transport_info.description {
                        log::warn!(
                            "rid {} of simulcast section {} has its own transport, keeping the last one",
                            transport_info.content_name,
                            info.mid
                        );
                    }
                }
            }
            None => transport_infos.push(transport_info.clone()),
        }
    }

    for info in context.simulcast_infos() {
        let description = mid_to_transport_description
            .remove(info.mid.as_str())
            .ok_or_else(|| Error::ErrSimulcastTransportInfoMissing(info.mid.clone()))?;
        transport_infos.push(TransportInfo::new(&info.mid, description));
    }

    desc.set_transport_infos(transport_infos);
    Ok(())
}
