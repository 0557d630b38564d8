use shared::error::{Error, Result};

use super::context::SignalingContext;
use crate::transport::ice::RTCIceCandidateInit;

/// Moves candidates gathered for a local simulcast section onto the first
/// RID section the remote peer knows it under.
pub(crate) fn patch_offerer_ice_candidates(
    context: &SignalingContext,
    candidates: &[RTCIceCandidateInit],
) -> Result<Vec<RTCIceCandidateInit>> {
    let out: Vec<RTCIceCandidateInit> = candidates
        .iter()
        .map(
            |candidate| match candidate.sdp_mid().and_then(|mid| context.simulcast_info_by_mid(mid)) {
                Some(info) => {
                    log::trace!("offerer candidate {} -> {}", info.mid, info.first_rid());
                    candidate.with_section(info.first_rid(), 0)
                }
                None => candidate.clone(),
            },
        )
        .collect();

    if out.is_empty() {
        return Err(Error::ErrNoIceCandidates);
    }
    Ok(out)
}

/// Moves candidates the remote peer gathered for a RID section back onto the
/// simulcast section owning that RID.
pub(crate) fn patch_answerer_ice_candidates(
    context: &SignalingContext,
    candidates: &[RTCIceCandidateInit],
) -> Result<Vec<RTCIceCandidateInit>> {
    let out: Vec<RTCIceCandidateInit> = candidates
        .iter()
        .map(
            |candidate| match candidate.sdp_mid().and_then(|rid| context.simulcast_info_by_rid(rid)) {
                Some(info) => {
                    log::trace!(
                        "answerer candidate {} -> {}",
                        candidate.sdp_mid().unwrap_or_default(),
                        info.mid
                    );
                    candidate.with_section(&info.mid, 0)
                }
                None => candidate.clone(),
            },
        )
        .collect();

    if out.is_empty() {
        return Err(Error::ErrNoIceCandidates);
    }
    Ok(out)
}
