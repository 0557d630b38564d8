pub(crate) mod codec;

pub use crate::constants::{FLEXFEC_CODEC_NAME, RED_CODEC_NAME, RTX_CODEC_NAME, ULPFEC_CODEC_NAME};
pub use codec::{CodecFilter, CodecFilterBuilder, RTCRtpCodecCapability, filter_codec_capabilities};
