use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNSPECIFIED_STR;

/// DTLS certificate fingerprint advertised with `a=fingerprint`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCDtlsFingerprint {
    /// Hash function name, e.g. `sha-256`.
    pub algorithm: String,
    /// Colon separated hex digest.
    pub value: String,
}

/// Value of the `a=setup` attribute (RFC 4145).
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionRole {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "passive")]
    Passive,
    #[serde(rename = "actpass")]
    Actpass,
    #[serde(rename = "holdconn")]
    Holdconn,
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionRole::Active => "active",
            ConnectionRole::Passive => "passive",
            ConnectionRole::Actpass => "actpass",
            ConnectionRole::Holdconn => "holdconn",
            ConnectionRole::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

/// ICE and DTLS parameters of one transport.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDescription {
    pub ice_ufrag: String,
    pub ice_pwd: String,
    #[serde(default)]
    pub ice_options: Vec<String>,
    #[serde(default)]
    pub fingerprint: Option<RTCDtlsFingerprint>,
    #[serde(default)]
    pub connection_role: ConnectionRole,
}

/// Binds a [`TransportDescription`] to the media section named `content_name`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInfo {
    pub content_name: String,
    pub description: TransportDescription,
}

impl TransportInfo {
    pub fn new(content_name: &str, description: TransportDescription) -> Self {
        TransportInfo {
            content_name: content_name.to_owned(),
            description,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_connection_role_string() {
        let tests = vec![
            (ConnectionRole::Unspecified, UNSPECIFIED_STR),
            (ConnectionRole::Active, "active"),
            (ConnectionRole::Passive, "passive"),
            (ConnectionRole::Actpass, "actpass"),
            (ConnectionRole::Holdconn, "holdconn"),
        ];

        for (role, expected) in tests {
            assert_eq!(role.to_string(), expected);
        }
    }
}
