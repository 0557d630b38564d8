use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// Every failure raised while rewriting a negotiation is unrecoverable for the
/// negotiation it belongs to. The kind only tells who is at fault:
/// `InvalidInput` means the caller handed over a malformed description or
/// called operations out of order, `InternalInconsistency` means the rewriter's
/// own bookkeeping no longer matches the documents it is processing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InternalInconsistency,
}

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    //SessionDescription model errors
    #[error("sdp: content {0} not found")]
    ErrSectionNotFound(String),
    #[error("sdp: content name {0} is used more than once")]
    ErrSdpDuplicateContentName(String),
    #[error("sdp: {0} references unknown content {1}")]
    ErrSdpUnknownContentName(String, String),
    #[error("sdp: expected {expected} description, got {actual}")]
    ErrSdpTypeMismatch { expected: String, actual: String },
    #[error("sdp: media sections {actual:?} do not match expected order {expected:?}")]
    ErrSectionOrderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    //Simulcast offer analysis errors
    #[error("simulcast section must have exactly one stream, got {0}")]
    ErrSimulcastStreamCount(usize),
    #[error("simulcast section {0} has a stream without rids")]
    ErrSimulcastStreamWithoutRids(String),
    #[error("mid RTP Extensions required for Simulcast")]
    ErrSimulcastMidRtpExtensionRequired,
    #[error("stream id RTP Extensions required for Simulcast")]
    ErrSimulcastRidRtpExtensionRequired,
    #[error("no transport info for simulcast section {0}")]
    ErrSimulcastTransportInfoNotFound(String),
    #[error("simulcast section {0} is already registered")]
    ErrSimulcastDuplicateMid(String),
    #[error("rid {0} is already registered for another simulcast section")]
    ErrSimulcastDuplicateRid(String),

    //Simulcast answer errors
    #[error("answer section {0} for simulcast layer must not carry streams")]
    ErrSimulcastAnswerHasStreams(String),
    #[error("no transport info collected for simulcast section {0}")]
    ErrSimulcastTransportInfoMissing(String),

    //SignalingInterceptor errors
    #[error("offer has not been patched yet")]
    ErrInterceptorOfferNotPatched,
    #[error("offer has already been patched for this negotiation")]
    ErrInterceptorOfferAlreadyPatched,
    #[error("no ice candidates to patch")]
    ErrNoIceCandidates,

    //Codec filter errors
    #[error("codec with name={name} and params {{{params}}} is unsupported for this peer connection")]
    ErrCodecNotSupported { name: String, params: String },
}

impl Error {
    /// Returns who is responsible for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ErrSdpDuplicateContentName(_)
            | Error::ErrSdpUnknownContentName(_, _)
            | Error::ErrSdpTypeMismatch { .. }
            | Error::ErrSimulcastStreamCount(_)
            | Error::ErrSimulcastStreamWithoutRids(_)
            | Error::ErrSimulcastMidRtpExtensionRequired
            | Error::ErrSimulcastRidRtpExtensionRequired
            | Error::ErrSimulcastTransportInfoNotFound(_)
            | Error::ErrSimulcastAnswerHasStreams(_)
            | Error::ErrInterceptorOfferNotPatched
            | Error::ErrInterceptorOfferAlreadyPatched => ErrorKind::InvalidInput,

            Error::ErrSectionNotFound(_)
            | Error::ErrSectionOrderMismatch { .. }
            | Error::ErrSimulcastDuplicateMid(_)
            | Error::ErrSimulcastDuplicateRid(_)
            | Error::ErrSimulcastTransportInfoMissing(_)
            | Error::ErrNoIceCandidates
            | Error::ErrCodecNotSupported { .. } => ErrorKind::InternalInconsistency,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_kind() {
        let tests = vec![
            (Error::ErrSimulcastStreamCount(2), ErrorKind::InvalidInput),
            (
                Error::ErrSimulcastMidRtpExtensionRequired,
                ErrorKind::InvalidInput,
            ),
            (
                Error::ErrSimulcastDuplicateRid("hi".to_owned()),
                ErrorKind::InternalInconsistency,
            ),
            (Error::ErrNoIceCandidates, ErrorKind::InternalInconsistency),
            (
                Error::ErrInterceptorOfferNotPatched,
                ErrorKind::InvalidInput,
            ),
        ];

        for (err, expected) in tests {
            assert_eq!(err.kind(), expected, "{err}");
        }
    }

    #[test]
    fn test_codec_not_supported_message() {
        let err = Error::ErrCodecNotSupported {
            name: "VP9".to_owned(),
            params: "profile-id=2;".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "codec with name=VP9 and params {profile-id=2;} is unsupported for this peer connection"
        );
    }
}
