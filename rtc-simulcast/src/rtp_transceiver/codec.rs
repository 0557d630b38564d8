use std::collections::BTreeMap;

use shared::error::{Error, Result};
use unicase::UniCase;

use crate::constants::{FLEXFEC_CODEC_NAME, RED_CODEC_NAME, RTX_CODEC_NAME, ULPFEC_CODEC_NAME};

/// A codec a peer connection is able to send or receive.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dictionary-rtcrtpcodeccapability-members)
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RTCRtpCodecCapability {
    /// MIME type of the codec (e.g., "video/VP8", "video/rtx")
    pub mime_type: String,
    /// Codec clock rate in Hz
    pub clock_rate: u32,
    /// Number of audio channels (0 for video codecs)
    pub channels: u16,
    /// Format-specific parameters, one entry per `key=value` of the fmtp line
    pub parameters: BTreeMap<String, String>,
}

impl RTCRtpCodecCapability {
    pub fn new(mime_type: &str, clock_rate: u32) -> Self {
        RTCRtpCodecCapability {
            mime_type: mime_type.to_owned(),
            clock_rate,
            ..Default::default()
        }
    }

    /// Replaces the parameters with the ones found in an SDP fmtp line,
    /// e.g. `profile-id=2;x-google-start-bitrate=800`.
    pub fn with_fmtp_line(mut self, sdp_fmtp_line: &str) -> Self {
        self.parameters = sdp_fmtp_line
            .split(';')
            .filter_map(|param| {
                let (key, value) = param.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    None
                } else {
                    Some((key.to_owned(), value.trim().to_owned()))
                }
            })
            .collect();
        self
    }

    /// Codec name, the MIME subtype: `VP8` for `video/VP8`.
    pub fn name(&self) -> &str {
        match self.mime_type.split_once('/') {
            Some((_, subtype)) => subtype,
            None => &self.mime_type,
        }
    }

    fn is(&self, codec_name: &str) -> bool {
        UniCase::new(self.name()) == UniCase::new(codec_name)
    }

    fn has_parameters(&self, required: &BTreeMap<String, String>) -> bool {
        required
            .iter()
            .all(|(key, value)| self.parameters.get(key) == Some(value))
    }
}

fn codec_required_params_to_string(codec_required_params: &BTreeMap<String, String>) -> String {
    codec_required_params
        .iter()
        .map(|(key, value)| format!("{key}={value};"))
        .collect()
}

/// Selects `codec_name` (restricted to the codecs carrying every one of
/// `codec_required_params`) plus the requested repair codecs out of
/// `supported_codecs`.
///
/// The primary codecs come first, in capability order, followed by every
/// rtx, flexfec, red and ulpfec capability that was asked for, also in
/// capability order. red and ulpfec have to be enabled or disabled together
/// and follow `use_flexfec`; `use_ulpfec` does not gate anything.
///
/// Names are matched ignoring case against the MIME subtype, so `vp8`
/// selects `video/VP8` and `RTX` selects `video/rtx`. Parameter keys and
/// values must match exactly.
///
/// Returns [`Error::ErrCodecNotSupported`] if no capability matches the
/// primary codec.
pub fn filter_codec_capabilities(
    codec_name: &str,
    codec_required_params: &BTreeMap<String, String>,
    use_rtx: bool,
    _use_ulpfec: bool,
    use_flexfec: bool,
    supported_codecs: &[RTCRtpCodecCapability],
) -> Result<Vec<RTCRtpCodecCapability>> {
    let mut output_codecs: Vec<RTCRtpCodecCapability> = supported_codecs
        .iter()
        .filter(|codec| codec.is(codec_name) && codec.has_parameters(codec_required_params))
        .cloned()
        .collect();

    if output_codecs.is_empty() {
        return Err(Error::ErrCodecNotSupported {
            name: codec_name.to_owned(),
            params: codec_required_params_to_string(codec_required_params),
        });
    }

    for codec in supported_codecs {
        let wanted = if codec.is(RTX_CODEC_NAME) {
            use_rtx
        } else if codec.is(FLEXFEC_CODEC_NAME)
            || codec.is(RED_CODEC_NAME)
            || codec.is(ULPFEC_CODEC_NAME)
        {
            use_flexfec
        } else {
            false
        };
        if wanted {
            output_codecs.push(codec.clone());
        }
    }

    log::debug!(
        "codec filter {codec_name} selected {:?}",
        output_codecs.iter().map(|c| c.name()).collect::<Vec<_>>()
    );

    Ok(output_codecs)
}

/// Codec preference used to pick the codecs a video transceiver negotiates.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CodecFilter {
    pub(crate) codec_name: String,
    pub(crate) required_params: BTreeMap<String, String>,
    pub(crate) use_rtx: bool,
    pub(crate) use_ulpfec: bool,
    pub(crate) use_flexfec: bool,
}

impl CodecFilter {
    pub fn codec_name(&self) -> &str {
        &self.codec_name
    }

    pub fn required_params(&self) -> &BTreeMap<String, String> {
        &self.required_params
    }

    pub fn filter(
        &self,
        supported_codecs: &[RTCRtpCodecCapability],
    ) -> Result<Vec<RTCRtpCodecCapability>> {
        filter_codec_capabilities(
            &self.codec_name,
            &self.required_params,
            self.use_rtx,
            self.use_ulpfec,
            self.use_flexfec,
            supported_codecs,
        )
    }
}

#[derive(Default, Debug, Clone)]
pub struct CodecFilterBuilder {
    codec_name: String,
    required_params: BTreeMap<String, String>,
    use_rtx: bool,
    use_ulpfec: bool,
    use_flexfec: bool,
}

impl CodecFilterBuilder {
    pub fn new() -> Self {
        CodecFilterBuilder::default()
    }

    pub fn with_codec_name(mut self, codec_name: &str) -> Self {
        self.codec_name = codec_name.to_owned();
        self
    }

    pub fn with_required_param(mut self, key: &str, value: &str) -> Self {
        self.required_params
            .insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_rtx(mut self, use_rtx: bool) -> Self {
        self.use_rtx = use_rtx;
        self
    }

    pub fn with_ulpfec(mut self, use_ulpfec: bool) -> Self {
        self.use_ulpfec = use_ulpfec;
        self
    }

    pub fn with_flexfec(mut self, use_flexfec: bool) -> Self {
        self.use_flexfec = use_flexfec;
        self
    }

    pub fn build(self) -> CodecFilter {
        CodecFilter {
            codec_name: self.codec_name,
            required_params: self.required_params,
            use_rtx: self.use_rtx,
            use_ulpfec: self.use_ulpfec,
            use_flexfec: self.use_flexfec,
        }
    }
}
