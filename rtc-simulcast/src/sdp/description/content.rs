use serde::{Deserialize, Serialize};

use super::media::MediaContentDescription;

/// Transport protocol family a media section is negotiated with.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaProtocolType {
    /// RTP based media (`UDP/TLS/RTP/SAVPF` and friends).
    #[default]
    #[serde(rename = "rtp")]
    Rtp,
    /// SCTP based data channels.
    #[serde(rename = "sctp")]
    Sctp,
    #[serde(rename = "other")]
    Other,
}

/// A named media section (`m=` block) of a session description.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInfo {
    pub mid: String,
    pub protocol: MediaProtocolType,
    pub media_description: MediaContentDescription,
}

impl ContentInfo {
    pub fn mid(&self) -> &str {
        &self.mid
    }

    pub fn media_description(&self) -> &MediaContentDescription {
        &self.media_description
    }

    pub fn media_description_mut(&mut self) -> &mut MediaContentDescription {
        &mut self.media_description
    }
}
