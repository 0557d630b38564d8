//! # RTC Simulcast - Sans-I/O simulcast SDP munging
//!
//! Some endpoints can negotiate a single video section carrying several RID
//! identified simulcast layers, while their peer only understands one stream
//! per media section. This crate sits between the two and rewrites the
//! session descriptions exchanged during offer/answer:
//!
//! - the local offer is **exploded**: every simulcast video section becomes one
//!   plain media section per RID before it is sent to the remote peer,
//! - the remote answer, which mirrors the exploded offer, is **collapsed** back
//!   into a single simulcast section per original section, in the original
//!   section order,
//! - ICE candidates are remapped between both naming spaces.
//!
//! Like the rest of the `rtc` stack nothing here performs I/O: every call is a
//! pure transformation over owned descriptions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rtc_simulcast::sdp::RTCSessionDescription;
//! use rtc_simulcast::signaling::SignalingInterceptor;
//! use rtc_simulcast::transport::ice::RTCIceCandidateInit;
//!
//! # fn example(
//! #     offer: RTCSessionDescription,
//! #     answer: RTCSessionDescription,
//! #     candidates: Vec<RTCIceCandidateInit>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let mut interceptor = SignalingInterceptor::new();
//!
//! // Apply `local_sdp` locally, send `remote_sdp` to the peer.
//! let offer = interceptor.patch_offer(offer)?;
//!
//! // Local candidates are renamed before they go out.
//! let _outgoing = interceptor.patch_offerer_ice_candidates(&candidates)?;
//!
//! // The peer answers the exploded offer; fold it back.
//! let answer = interceptor.patch_answer(answer)?;
//! # let _ = (offer, answer);
//! # Ok(())
//! # }
//! ```
#![warn(rust_2018_idioms)]

pub use shared;

pub(crate) mod constants;
pub mod rtp_transceiver;
pub mod sdp;
pub mod signaling;
pub mod transport;
