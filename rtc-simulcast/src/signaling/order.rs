use shared::error::{Error, Result};

use crate::sdp::description::SessionDescription;

/// Re-sequences the sections of `source` to follow `mids_order`.
///
/// `source` must hold exactly the sections named in `mids_order`, in any
/// order. Groups and transport infos are kept as they are.
pub(crate) fn restore_media_sections_order(
    mids_order: &[String],
    mut source: SessionDescription,
) -> Result<SessionDescription> {
    let actual = source.content_names();
    let mut remaining = source.take_contents();

    let mut ordered = Vec::with_capacity(remaining.len());
    for mid in mids_order {
        let index = remaining
            .iter()
            .position(|content| &content.mid == mid)
            .ok_or_else(|| Error::ErrSectionNotFound(mid.clone()))?;
        ordered.push(remaining.remove(index));
    }
    if !remaining.is_empty() {
        return Err(Error::ErrSectionOrderMismatch {
            expected: mids_order.to_vec(),
            actual,
        });
    }

    for content in ordered {
        source.add_content(&content.mid, content.protocol, content.media_description);
    }
    Ok(source)
}
