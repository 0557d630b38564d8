use serde::{Deserialize, Serialize};

/// ICECandidateInit is used to serialize ice candidates
/// <https://w3c.github.io/webrtc-pc/#dom-rtcicecandidateinit>
///
/// The `candidate` line is opaque here: only the media section it is
/// attached to (`sdp_mid` / `sdp_mline_index`) is ever rewritten.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidateInit {
    pub candidate: String,
    pub sdp_mid: Option<String>,
    #[serde(rename = "sdpMLineIndex")]
    pub sdp_mline_index: Option<u16>,
    pub username_fragment: Option<String>,
}

impl RTCIceCandidateInit {
    pub fn new(sdp_mid: &str, sdp_mline_index: u16, candidate: &str) -> Self {
        RTCIceCandidateInit {
            candidate: candidate.to_owned(),
            sdp_mid: Some(sdp_mid.to_owned()),
            sdp_mline_index: Some(sdp_mline_index),
            username_fragment: None,
        }
    }

    pub fn sdp_mid(&self) -> Option<&str> {
        self.sdp_mid.as_deref()
    }

    /// Same candidate, attached to another media section.
    pub(crate) fn with_section(&self, sdp_mid: &str, sdp_mline_index: u16) -> Self {
        RTCIceCandidateInit {
            sdp_mid: Some(sdp_mid.to_owned()),
            sdp_mline_index: Some(sdp_mline_index),
            ..self.clone()
        }
    }
}
