use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use super::description::SessionDescription;
use super::sdp_type::RTCSdpType;

/// A typed session description together with its offer/answer role and the
/// `o=` line session identity.
///
/// # Signaling Exchange via JSON
///
/// ```
/// use rtc_simulcast::sdp::{RTCSdpType, RTCSessionDescription};
/// use rtc_simulcast::sdp::description::SessionDescription;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let offer = RTCSessionDescription::offer(SessionDescription::new(), "4611731400430051336", "2");
/// let json = serde_json::to_string(&offer)?;
///
/// let received: RTCSessionDescription = serde_json::from_str(&json)?;
/// assert_eq!(received.sdp_type, RTCSdpType::Offer);
/// assert_eq!(received, offer);
/// # Ok(())
/// # }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCSessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: RTCSdpType,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "sessionVersion")]
    pub session_version: String,
    pub description: SessionDescription,
}

impl fmt::Display for RTCSessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, session: {} {}, sections: [{}]",
            self.sdp_type,
            self.session_id,
            self.session_version,
            self.description.content_names().join(", ")
        )
    }
}

impl RTCSessionDescription {
    pub fn new(
        sdp_type: RTCSdpType,
        description: SessionDescription,
        session_id: &str,
        session_version: &str,
    ) -> Self {
        RTCSessionDescription {
            sdp_type,
            session_id: session_id.to_owned(),
            session_version: session_version.to_owned(),
            description,
        }
    }

    pub fn offer(description: SessionDescription, session_id: &str, session_version: &str) -> Self {
        Self::new(RTCSdpType::Offer, description, session_id, session_version)
    }

    pub fn answer(
        description: SessionDescription,
        session_id: &str,
        session_version: &str,
    ) -> Self {
        Self::new(RTCSdpType::Answer, description, session_id, session_version)
    }

    pub fn pranswer(
        description: SessionDescription,
        session_id: &str,
        session_version: &str,
    ) -> Self {
        Self::new(RTCSdpType::Pranswer, description, session_id, session_version)
    }

    /// Returns an error unless this description is of type `expected`.
    pub(crate) fn expect_type(&self, expected: RTCSdpType) -> Result<()> {
        if self.sdp_type == expected {
            Ok(())
        } else {
            Err(Error::ErrSdpTypeMismatch {
                expected: expected.to_string(),
                actual: self.sdp_type.to_string(),
            })
        }
    }
}
