//! Offer/answer rewriting for peers without native simulcast negotiation.
//!
//! [`SignalingInterceptor`] is created once per negotiation and must be driven
//! in order:
//!
//! 1. [`patch_offer`](SignalingInterceptor::patch_offer) with the local offer,
//!    which captures every simulcast video section into the
//!    [`SignalingContext`] and explodes it into one section per RID,
//! 2. [`patch_answer`](SignalingInterceptor::patch_answer) with the remote
//!    answer to that exploded offer,
//!
//! with candidate patching allowed at any time after step 1.
//!
//! # Limitations
//!
//! - Only simulcast sections made of a single stream with RIDs are supported.
//! - The repaired-rid header extension is not restored in the answer, rtx
//!   does not work together with simulcast.
//! - All RID sections of one simulcast section must share one transport; if
//!   the answer gives them different transports the last one listed is kept.

mod answer;
mod candidate;
mod context;
mod offer;
mod order;


use std::fmt;

use shared::error::{Error, Result};

use crate::sdp::description::{ContentGroup, GROUP_TYPE_BUNDLE, SessionDescription};
use crate::sdp::{RTCSdpType, RTCSessionDescription};
use crate::transport::ice::RTCIceCandidateInit;

pub use context::{SignalingContext, SimulcastSectionInfo};

/// The two views of one description: `local_sdp` is applied to the local
/// peer connection, `remote_sdp` is sent to the remote peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAndRemoteSdp {
    pub local_sdp: RTCSessionDescription,
    pub remote_sdp: RTCSessionDescription,
}

/// Progress of the negotiation an interceptor is attached to.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignalingInterceptorState {
    #[default]
    New,
    OfferPatched,
    AnswerPatched,
}

impl fmt::Display for SignalingInterceptorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            SignalingInterceptorState::New => "new",
            SignalingInterceptorState::OfferPatched => "offer-patched",
            SignalingInterceptorState::AnswerPatched => "answer-patched",
        };
        write!(f, "{s}")
    }
}

#[derive(Default, Debug)]
pub struct SignalingInterceptor {
    context: SignalingContext,
    state: SignalingInterceptorState,
}

impl SignalingInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SignalingInterceptorState {
        self.state
    }

    pub fn context(&self) -> &SignalingContext {
        &self.context
    }

    /// Analyzes the local `offer` and returns it together with the offer to
    /// send to the remote peer.
    ///
    /// Without simulcast sections both descriptions are identical. Otherwise
    /// `local_sdp` is `offer` with its simulcast sections normalized to
    /// explicit send RIDs and layers, and `remote_sdp` carries one section per
    /// RID instead of each simulcast section.
    pub fn patch_offer(&mut self, mut offer: RTCSessionDescription) -> Result<LocalAndRemoteSdp> {
        if self.state != SignalingInterceptorState::New {
            return Err(Error::ErrInterceptorOfferAlreadyPatched);
        }
        offer.expect_type(RTCSdpType::Offer)?;

        let mut context = SignalingContext::new();
        context.fill(&mut offer.description)?;

        let remote_sdp = if context.has_simulcast() {
            offer::explode_offer(&context, &offer)?
        } else {
            offer.clone()
        };

        self.context = context;
        self.state = SignalingInterceptorState::OfferPatched;
        log::debug!(
            "patched offer: {} simulcast section(s), remote sections {:?}",
            self.context.simulcast_infos().len(),
            remote_sdp.description.content_names()
        );

        Ok(LocalAndRemoteSdp {
            local_sdp: offer,
            remote_sdp,
        })
    }

    /// Turns the remote `answer` to the exploded offer back into an answer
    /// matching the local offer.
    ///
    /// `local_sdp` is `answer` untouched, `remote_sdp` is the collapsed answer
    /// to apply as the remote description of the local peer connection.
    pub fn patch_answer(&mut self, answer: RTCSessionDescription) -> Result<LocalAndRemoteSdp> {
        if self.state == SignalingInterceptorState::New {
            return Err(Error::ErrInterceptorOfferNotPatched);
        }
        answer.expect_type(RTCSdpType::Answer)?;

        let remote_sdp = if self.context.has_simulcast() {
            answer::collapse_answer(&self.context, &answer)?
        } else {
            answer.clone()
        };

        self.state = SignalingInterceptorState::AnswerPatched;
        log::debug!(
            "patched answer: sections {:?}",
            remote_sdp.description.content_names()
        );

        Ok(LocalAndRemoteSdp {
            local_sdp: answer,
            remote_sdp,
        })
    }

    /// Renames local candidates of simulcast sections for the remote peer.
    pub fn patch_offerer_ice_candidates(
        &self,
        candidates: &[RTCIceCandidateInit],
    ) -> Result<Vec<RTCIceCandidateInit>> {
        self.ensure_offer_patched()?;
        candidate::patch_offerer_ice_candidates(&self.context, candidates)
    }

    /// Renames remote candidates of RID sections for the local peer.
    pub fn patch_answerer_ice_candidates(
        &self,
        candidates: &[RTCIceCandidateInit],
    ) -> Result<Vec<RTCIceCandidateInit>> {
        self.ensure_offer_patched()?;
        candidate::patch_answerer_ice_candidates(&self.context, candidates)
    }

    fn ensure_offer_patched(&self) -> Result<()> {
        if self.state == SignalingInterceptorState::New {
            Err(Error::ErrInterceptorOfferNotPatched)
        } else {
            Ok(())
        }
    }
}

/// Replaces any BUNDLE group of `desc` by one holding all of its sections.
pub(crate) fn bundle_all_contents(desc: &mut SessionDescription) {
    let mut bundle_group = ContentGroup::new(GROUP_TYPE_BUNDLE);
    for content in desc.contents() {
        bundle_group.add_content_name(content.mid());
    }
    while desc.remove_group_by_name(GROUP_TYPE_BUNDLE) {}
    desc.add_group(bundle_group);
}
