use crate::path::Segment;
use tfschema_model::{AttributeType, BlockType, ResourceSchema};
use tracing::debug;

/// Whatever a path leads to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeAtPath<'s> {
    /// No segments were walked.
    Schema(&'s ResourceSchema),
    /// The path ended on a nested block.
    Block(&'s BlockType),
    /// The path ended on an attribute, or inside one.
    Type(&'s AttributeType),
}

impl<'s> TypeAtPath<'s> {
    pub fn attribute_type(&self) -> Option<&'s AttributeType> {
        match *self {
            Self::Type(ty) => Some(ty),
            _ => None,
        }
    }
}

/// Walks blocks first, then attributes, then members of list/set-of-object
/// attributes.
///
/// At each level a nested block shadows an attribute of the same name.
pub(crate) fn type_at_path<'s>(root: &'s ResourceSchema, segments: &[Segment<'_>]) -> Option<TypeAtPath<'s>> {
    let mut current = TypeAtPath::Schema(root);
    let mut block = &root.block;

    for (i, segment) in segments.iter().enumerate() {
        if let Some(block_type) = block.block_type(segment.name) {
            block = &block_type.block;
            current = TypeAtPath::Block(block_type);
            continue;
        }

        if let Some(attribute) = block.attribute(segment.name) {
            return attribute_type_at(&attribute.attribute_type, *segment, &segments[i + 1..])
                .map(TypeAtPath::Type);
        }

        debug!(segment = segment.name, "Unknown path segment");
        return None;
    }

    Some(current)
}

/// Indexes into a declared attribute type with the segments left after the
/// attribute name.
///
/// Only lists and sets of objects can be walked, one member name per segment.
/// A `[]` on the last segment projects a collection onto its element type.
fn attribute_type_at<'s>(
    declared: &'s AttributeType,
    reached_by: Segment<'_>,
    leftover: &[Segment<'_>],
) -> Option<&'s AttributeType> {
    let mut ty = declared;
    let mut last = reached_by;

    for segment in leftover {
        let Some(members) = ty.indexable_members() else {
            debug!(%ty, segment = segment.name, "Type cannot be indexed by member name");
            return None;
        };
        ty = members.get(segment.name)?;
        last = *segment;
    }

    if last.indexed {
        Some(ty.element().unwrap_or(ty))
    } else {
        Some(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfschema_model::PrimitiveType;

    fn seg(name: &str) -> Segment<'_> {
        Segment::parse(name)
    }

    #[test]
    fn no_leftover_returns_declared() {
        let ty = AttributeType::map(PrimitiveType::String.into());
        assert_eq!(attribute_type_at(&ty, seg("tags"), &[]), Some(&ty));
    }

    #[test]
    fn index_marker_projects_element() {
        let ty = AttributeType::set(PrimitiveType::Number.into());
        assert_eq!(
            attribute_type_at(&ty, seg("ports[]"), &[]),
            Some(&AttributeType::from(PrimitiveType::Number))
        );
    }

    #[test]
    fn walks_nested_object_lists() {
        let ty = AttributeType::list(AttributeType::object([(
            "rules",
            AttributeType::set(AttributeType::object([(
                "cidrs",
                AttributeType::list(PrimitiveType::String.into()),
            )])),
        )]));

        assert_eq!(
            attribute_type_at(&ty, seg("policy[]"), &[seg("rules[]"), seg("cidrs")]),
            Some(&AttributeType::list(PrimitiveType::String.into()))
        );
        assert_eq!(
            attribute_type_at(&ty, seg("policy"), &[seg("rules"), seg("cidrs[]")]),
            Some(&AttributeType::from(PrimitiveType::String))
        );
        assert_eq!(attribute_type_at(&ty, seg("policy"), &[seg("missing")]), None);
    }

    #[test]
    fn map_of_object_is_terminal() {
        let ty = AttributeType::map(AttributeType::object([("a", PrimitiveType::Bool.into())]));
        assert_eq!(attribute_type_at(&ty, seg("m"), &[seg("a")]), None);
    }
}
