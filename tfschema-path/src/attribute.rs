use crate::path::Segment;
use std::borrow::Cow;
use tfschema_model::{Attribute, Block};
use tracing::debug;

/// Resolves the single trailing segment to an attribute of `block`.
///
/// With a `[]` marker on a list, set or map attribute the result is a copy of
/// the attribute retyped to the element type.
pub(crate) fn resolve_attribute<'s>(
    block: &'s Block,
    segments: &[Segment<'_>],
) -> Option<Cow<'s, Attribute>> {
    let [segment] = segments else {
        debug!(
            remaining = segments.len(),
            "Attribute lookup needs exactly one trailing segment"
        );
        return None;
    };

    let attribute = block.attribute(segment.name)?;
    if segment.indexed {
        if let Some(element) = attribute.attribute_type.element() {
            return Some(Cow::Owned(attribute.with_type(element.clone())));
        }
    }
    Some(Cow::Borrowed(attribute))
}
