use std::fmt;

use serde::{Deserialize, Serialize};

use super::extension::{RtpExtension, find_header_extension};
use super::simulcast::SimulcastDescription;
use super::stream::StreamParams;
use crate::constants::UNSPECIFIED_STR;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[default]
    Unspecified,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "data")]
    Data,
}

impl From<&str> for MediaType {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => MediaType::Audio,
            "video" => MediaType::Video,
            "data" | "application" => MediaType::Data,
            _ => MediaType::Unspecified,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Data => "data",
            MediaType::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

/// Media level part of a media section: header extensions, streams and the
/// simulcast layering.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaContentDescription {
    pub media_type: MediaType,
    #[serde(default)]
    pub rtp_header_extensions: Vec<RtpExtension>,
    #[serde(default)]
    pub streams: Vec<StreamParams>,
    #[serde(default)]
    pub simulcast: SimulcastDescription,
}

impl MediaContentDescription {
    pub fn new(media_type: MediaType) -> Self {
        MediaContentDescription {
            media_type,
            ..Default::default()
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn rtp_header_extensions(&self) -> &[RtpExtension] {
        &self.rtp_header_extensions
    }

    pub fn clear_rtp_header_extensions(&mut self) {
        self.rtp_header_extensions.clear();
    }

    pub fn set_rtp_header_extensions(&mut self, extensions: Vec<RtpExtension>) {
        self.rtp_header_extensions = extensions;
    }

    pub fn add_rtp_header_extension(&mut self, extension: RtpExtension) {
        self.rtp_header_extensions.push(extension);
    }

    pub fn find_rtp_header_extension(&self, uri: &str) -> Option<&RtpExtension> {
        find_header_extension(&self.rtp_header_extensions, uri)
    }

    pub fn streams(&self) -> &[StreamParams] {
        &self.streams
    }

    pub fn streams_mut(&mut self) -> &mut Vec<StreamParams> {
        &mut self.streams
    }

    pub fn has_simulcast(&self) -> bool {
        !self.simulcast.is_empty()
    }

    pub fn simulcast_description(&self) -> &SimulcastDescription {
        &self.simulcast
    }

    pub fn set_simulcast_description(&mut self, simulcast: SimulcastDescription) {
        self.simulcast = simulcast;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{SDES_MID_URI, SDES_RTP_STREAM_ID_URI};
    use crate::sdp::description::simulcast::SimulcastLayer;

    #[test]
    fn test_media_type() {
        let tests = vec![
            ("audio", MediaType::Audio),
            ("video", MediaType::Video),
            ("application", MediaType::Data),
            ("text", MediaType::Unspecified),
        ];

        for (raw, expected) in tests {
            assert_eq!(MediaType::from(raw), expected);
        }
        assert_eq!(MediaType::Video.to_string(), "video");
    }

    #[test]
    fn test_header_extensions() {
        let mut media = MediaContentDescription::new(MediaType::Video);
        media.set_rtp_header_extensions(vec![
            RtpExtension::new(SDES_MID_URI, 1),
            RtpExtension::new(SDES_RTP_STREAM_ID_URI, 2),
        ]);

        assert_eq!(
            media
                .find_rtp_header_extension(SDES_RTP_STREAM_ID_URI)
                .map(|ext| ext.id),
            Some(2)
        );

        media.clear_rtp_header_extensions();
        assert!(media.find_rtp_header_extension(SDES_MID_URI).is_none());
    }

    #[test]
    fn test_has_simulcast() {
        let mut media = MediaContentDescription::new(MediaType::Video);
        assert!(!media.has_simulcast());

        let mut simulcast = SimulcastDescription::default();
        simulcast.send_layers.add_layer(SimulcastLayer::new("hi", false));
        media.set_simulcast_description(simulcast);
        assert!(media.has_simulcast());
    }
}
