pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

/// Group semantics used to bundle every media section on one transport.
pub const GROUP_TYPE_BUNDLE: &str = "BUNDLE";

pub const SDES_MID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:mid";
pub const SDES_RTP_STREAM_ID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id";
pub const SDES_REPAIRED_RTP_STREAM_ID_URI: &str =
    "urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id";

pub const RTX_CODEC_NAME: &str = "rtx";
pub const FLEXFEC_CODEC_NAME: &str = "flexfec-03";
pub const RED_CODEC_NAME: &str = "red";
pub const ULPFEC_CODEC_NAME: &str = "ulpfec";
