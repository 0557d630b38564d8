use std::fmt;

use crate::constants::UNSPECIFIED_STR;
use serde::{Deserialize, Serialize};

/// Describes the type of a session description in the SDP offer/answer model.
///
/// The rewriter only ever consumes [`RTCSdpType::Offer`] and
/// [`RTCSdpType::Answer`]; the remaining values exist so that descriptions
/// coming from a signaling channel can be represented faithfully.
///
/// ```
/// use rtc_simulcast::sdp::RTCSdpType;
///
/// assert_eq!(RTCSdpType::Offer.to_string(), "offer");
/// assert_eq!(RTCSdpType::from("answer"), RTCSdpType::Answer);
/// ```
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum RTCSdpType {
    #[default]
    Unspecified = 0,

    /// The description MUST be treated as an SDP offer.
    #[serde(rename = "offer")]
    Offer,

    /// The description MUST be treated as a provisional SDP answer.
    #[serde(rename = "pranswer")]
    Pranswer,

    /// The description MUST be treated as a final SDP answer.
    #[serde(rename = "answer")]
    Answer,

    /// The description cancels the current negotiation.
    #[serde(rename = "rollback")]
    Rollback,
}

const SDP_TYPE_OFFER_STR: &str = "offer";
const SDP_TYPE_PRANSWER_STR: &str = "pranswer";
const SDP_TYPE_ANSWER_STR: &str = "answer";
const SDP_TYPE_ROLLBACK_STR: &str = "rollback";

impl From<&str> for RTCSdpType {
    fn from(raw: &str) -> Self {
        match raw {
            SDP_TYPE_OFFER_STR => RTCSdpType::Offer,
            SDP_TYPE_PRANSWER_STR => RTCSdpType::Pranswer,
            SDP_TYPE_ANSWER_STR => RTCSdpType::Answer,
            SDP_TYPE_ROLLBACK_STR => RTCSdpType::Rollback,
            _ => RTCSdpType::Unspecified,
        }
    }
}

impl fmt::Display for RTCSdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCSdpType::Offer => SDP_TYPE_OFFER_STR,
            RTCSdpType::Pranswer => SDP_TYPE_PRANSWER_STR,
            RTCSdpType::Answer => SDP_TYPE_ANSWER_STR,
            RTCSdpType::Rollback => SDP_TYPE_ROLLBACK_STR,
            RTCSdpType::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
