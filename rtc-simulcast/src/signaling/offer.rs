use shared::error::{Error, Result};

use super::bundle_all_contents;
use super::context::{SignalingContext, SimulcastSectionInfo};
use crate::sdp::RTCSessionDescription;
use crate::sdp::description::{
    MediaContentDescription, RtpExtension, SDES_MID_URI, SDES_REPAIRED_RTP_STREAM_ID_URI,
    SDES_RTP_STREAM_ID_URI, SimulcastDescription, TransportInfo,
};

/// Builds the offer sent to the remote peer: every simulcast section known to
/// `context` is replaced by one plain section per RID, all sections are
/// bundled and every RID section reuses the transport of its simulcast
/// section.
pub(crate) fn explode_offer(
    context: &SignalingContext,
    offer: &RTCSessionDescription,
) -> Result<RTCSessionDescription> {
    // The original offer is not touched past this point.
    let mut desc = offer.description.clone();

    for info in context.simulcast_infos() {
        let simulcast_content = desc
            .get_content_by_name(&info.mid)
            .ok_or_else(|| Error::ErrSectionNotFound(info.mid.clone()))?;

        let mut prototype = simulcast_content.media_description().clone();
        desc.remove_content_by_name(&info.mid);

        make_single_stream_prototype(info, &mut prototype)?;

        for rid in &info.rids {
            desc.add_content(rid, info.media_protocol_type, prototype.clone());
        }
        log::debug!("exploded simulcast section {} into {:?}", info.mid, info.rids);
    }

    bundle_all_contents(&mut desc);

    let mut transport_infos: Vec<TransportInfo> = desc
        .transport_infos()
        .iter()
        .filter(|t| context.simulcast_info_by_mid(&t.content_name).is_none())
        .cloned()
        .collect();
    for info in context.simulcast_infos() {
        for rid in &info.rids {
            transport_infos.push(TransportInfo::new(rid, info.transport_description.clone()));
        }
    }
    desc.set_transport_infos(transport_infos);

    Ok(RTCSessionDescription::offer(
        desc,
        &offer.session_id,
        &offer.session_version,
    ))
}

/// Turns a simulcast media description into the shape shared by all its RID
/// sections.
///
/// The remote peer must read the mid header extension of a RID section as if
/// it were the rid of the simulcast section, so mid takes over the id of rid
/// and both rid extensions are dropped. rtx is not supported in simulcast.
fn make_single_stream_prototype(
    info: &SimulcastSectionInfo,
    prototype: &mut MediaContentDescription,
) -> Result<()> {
    let extensions: Vec<RtpExtension> = prototype
        .rtp_header_extensions()
        .iter()
        .filter(|ext| ext.uri != SDES_RTP_STREAM_ID_URI && ext.uri != SDES_REPAIRED_RTP_STREAM_ID_URI)
        .map(|ext| {
            if ext.uri == SDES_MID_URI {
                RtpExtension {
                    id: info.rid_extension.id,
                    ..ext.clone()
                }
            } else {
                ext.clone()
            }
        })
        .collect();
    prototype.clear_rtp_header_extensions();
    prototype.set_rtp_header_extensions(extensions);

    let streams = prototype.streams_mut();
    if streams.len() != 1 {
        return Err(Error::ErrSimulcastStreamCount(streams.len()));
    }
    if !streams[0].has_rids() {
        return Err(Error::ErrSimulcastStreamWithoutRids(info.mid.clone()));
    }
    streams[0].set_rids(vec![]);
    prototype.set_simulcast_description(SimulcastDescription::default());

    Ok(())
}
