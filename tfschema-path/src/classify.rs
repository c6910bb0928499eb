use crate::type_at_path::TypeAtPath;
use tfschema_model::AttributeType;
use tracing::debug;

/// Normalizes a resolution result into the type the caller should emit for.
///
/// Attribute types pass through unchanged. Everything else, including a
/// failed resolution, becomes [`AttributeType::DYNAMIC`].
pub(crate) fn classify(resolved: Option<TypeAtPath<'_>>, path: &str) -> AttributeType {
    match resolved {
        Some(TypeAtPath::Type(ty)) => ty.clone(),
        Some(TypeAtPath::Block(block_type)) => {
            debug!(
                path,
                nesting_mode = ?block_type.nesting_mode,
                "Could not determine type at path; it names a block, not an attribute"
            );
            AttributeType::DYNAMIC
        }
        Some(TypeAtPath::Schema(_)) | None => AttributeType::DYNAMIC,
    }
}
