use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a RID restriction, see RFC 8851 `a=rid:<id> <direction>`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RidDirection {
    #[default]
    #[serde(rename = "send")]
    Send,
    #[serde(rename = "recv")]
    Receive,
}

impl fmt::Display for RidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RidDirection::Send => write!(f, "send"),
            RidDirection::Receive => write!(f, "recv"),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidDescription {
    pub rid: String,
    pub direction: RidDirection,
}

impl RidDescription {
    pub fn new(rid: &str, direction: RidDirection) -> Self {
        RidDescription {
            rid: rid.to_owned(),
            direction,
        }
    }
}

/// One media stream announced inside a media section.
///
/// A stream either identifies its encodings by SSRC or, for simulcast, by the
/// list of RIDs it sends or receives.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Media stream id (`a=msid` stream part), may be empty.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ssrcs: Vec<u32>,
    #[serde(default)]
    pub rids: Vec<RidDescription>,
}

impl StreamParams {
    pub fn has_rids(&self) -> bool {
        !self.rids.is_empty()
    }

    pub fn rids(&self) -> &[RidDescription] {
        &self.rids
    }

    pub fn set_rids(&mut self, rids: Vec<RidDescription>) {
        self.rids = rids;
    }
}
