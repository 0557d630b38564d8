//! Typed model of a session description.
//!
//! Sections are owned by value in offer order; groups and transport bindings
//! refer to them by name only, so removing a section never leaves a dangling
//! reference behind, just a name that [`SessionDescription::validate`] reports.

pub mod content;
pub mod extension;
pub mod group;
pub mod media;
pub mod simulcast;
pub mod stream;
pub mod transport;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

pub use crate::constants::{
    GROUP_TYPE_BUNDLE, SDES_MID_URI, SDES_REPAIRED_RTP_STREAM_ID_URI, SDES_RTP_STREAM_ID_URI,
};
pub use content::{ContentInfo, MediaProtocolType};
pub use extension::RtpExtension;
pub use group::ContentGroup;
pub use media::{MediaContentDescription, MediaType};
pub use simulcast::{SimulcastDescription, SimulcastLayer, SimulcastLayerList};
pub use stream::{RidDescription, RidDirection, StreamParams};
pub use transport::{ConnectionRole, RTCDtlsFingerprint, TransportDescription, TransportInfo};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(default)]
    contents: Vec<ContentInfo>,
    #[serde(default)]
    groups: Vec<ContentGroup>,
    #[serde(default)]
    transport_infos: Vec<TransportInfo>,
}

impl SessionDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &[ContentInfo] {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut [ContentInfo] {
        &mut self.contents
    }

    /// Section names in document order.
    pub fn content_names(&self) -> Vec<String> {
        self.contents.iter().map(|c| c.mid.clone()).collect()
    }

    pub fn get_content_by_name(&self, name: &str) -> Option<&ContentInfo> {
        self.contents.iter().find(|c| c.mid == name)
    }

    pub fn get_content_by_name_mut(&mut self, name: &str) -> Option<&mut ContentInfo> {
        self.contents.iter_mut().find(|c| c.mid == name)
    }

    /// Appends a new section at the end of the document.
    pub fn add_content(
        &mut self,
        name: &str,
        protocol: MediaProtocolType,
        media_description: MediaContentDescription,
    ) {
        self.contents.push(ContentInfo {
            mid: name.to_owned(),
            protocol,
            media_description,
        });
    }

    /// Removes the section named `name`, returns false if there was none.
    pub fn remove_content_by_name(&mut self, name: &str) -> bool {
        match self.contents.iter().position(|c| c.mid == name) {
            Some(index) => {
                self.contents.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves all sections out, leaving the document without any.
    pub fn take_contents(&mut self) -> Vec<ContentInfo> {
        std::mem::take(&mut self.contents)
    }

    pub fn groups(&self) -> &[ContentGroup] {
        &self.groups
    }

    pub fn has_group(&self, semantics: &str) -> bool {
        self.get_group_by_name(semantics).is_some()
    }

    pub fn get_group_by_name(&self, semantics: &str) -> Option<&ContentGroup> {
        self.groups.iter().find(|g| g.semantics == semantics)
    }

    pub fn add_group(&mut self, group: ContentGroup) {
        self.groups.push(group);
    }

    /// Removes the first group with the given semantics, returns false if
    /// there was none.
    pub fn remove_group_by_name(&mut self, semantics: &str) -> bool {
        match self.groups.iter().position(|g| g.semantics == semantics) {
            Some(index) => {
                self.groups.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn transport_infos(&self) -> &[TransportInfo] {
        &self.transport_infos
    }

    pub fn set_transport_infos(&mut self, transport_infos: Vec<TransportInfo>) {
        self.transport_infos = transport_infos;
    }

    pub fn add_transport_info(&mut self, transport_info: TransportInfo) {
        self.transport_infos.push(transport_info);
    }

    pub fn get_transport_info_by_name(&self, name: &str) -> Option<&TransportInfo> {
        self.transport_infos.iter().find(|t| t.content_name == name)
    }

    /// Checks that section names are unique and that every group member and
    /// transport binding names an existing section.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for content in &self.contents {
            if !names.insert(content.mid.as_str()) {
                return Err(Error::ErrSdpDuplicateContentName(content.mid.clone()));
            }
        }

        for group in &self.groups {
            for name in &group.content_names {
                if !names.contains(name.as_str()) {
                    return Err(Error::ErrSdpUnknownContentName(
                        format!("group {}", group.semantics),
                        name.clone(),
                    ));
                }
            }
        }

        for transport_info in &self.transport_infos {
            if !names.contains(transport_info.content_name.as_str()) {
                return Err(Error::ErrSdpUnknownContentName(
                    "transport info".to_owned(),
                    transport_info.content_name.clone(),
                ));
            }
        }

        Ok(())
    }
}
