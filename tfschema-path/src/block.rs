use crate::path::Segment;
use tfschema_model::{Block, BlockType, ResourceSchema};
use tracing::debug;

/// A block reached by walking nested block types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockNode<'s> {
    /// Nothing was walked: the top-level block of a resource or provider.
    Root(&'s ResourceSchema),
    Nested(&'s BlockType),
}

impl<'s> BlockNode<'s> {
    pub fn block(&self) -> &'s Block {
        match *self {
            Self::Root(schema) => &schema.block,
            Self::Nested(block_type) => &block_type.block,
        }
    }

    /// Cardinality limit of a nested block; roots have none.
    pub fn max_items(&self) -> Option<u64> {
        match *self {
            Self::Root(_) => None,
            Self::Nested(block_type) => block_type.max_items,
        }
    }

    pub fn is_single_item(&self) -> bool {
        match *self {
            Self::Root(_) => true,
            Self::Nested(block_type) => block_type.is_single_item(),
        }
    }
}

/// Walks `segments` through nested block types only.
///
/// Attributes are never consulted, so a segment naming an attribute fails.
pub(crate) fn descend<'s>(root: &'s ResourceSchema, segments: &[Segment<'_>]) -> Option<BlockNode<'s>> {
    let mut node = BlockNode::Root(root);
    for segment in segments {
        match node.block().block_type(segment.name) {
            Some(block_type) => node = BlockNode::Nested(block_type),
            None => {
                debug!(segment = segment.name, "No nested block with this name");
                return None;
            }
        }
    }
    Some(node)
}
