use serde::{Deserialize, Serialize};

/// An RFC 8285 header extension negotiated for a media section (`a=extmap`).
///
/// The id is only unique within one media section.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpExtension {
    pub uri: String,
    pub id: u16,
    #[serde(default)]
    pub encrypted: bool,
}

impl RtpExtension {
    pub fn new(uri: &str, id: u16) -> Self {
        RtpExtension {
            uri: uri.to_owned(),
            id,
            encrypted: false,
        }
    }
}

/// Returns the first extension in `extensions` registered for `uri`.
pub fn find_header_extension<'a>(
    extensions: &'a [RtpExtension],
    uri: &str,
) -> Option<&'a RtpExtension> {
    extensions.iter().find(|ext| ext.uri == uri)
}
