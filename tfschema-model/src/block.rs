use crate::AttributeType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A schema block: leaf attributes plus nested block definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub block_types: BTreeMap<String, BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

impl Block {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn block_type(&self, name: &str) -> Option<&BlockType> {
        self.block_types.get(name)
    }
}

/// A nested block definition with its cardinality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockType {
    pub nesting_mode: NestingMode,
    #[serde(default)]
    pub block: Block,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
}

impl BlockType {
    /// Whether at most one instance of this block may appear.
    ///
    /// Code generators render these as a plain object instead of an array.
    pub fn is_single_item(&self) -> bool {
        self.max_items == Some(1)
            || matches!(self.nesting_mode, NestingMode::Single | NestingMode::Group)
    }
}

/// How instances of a nested block are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    Single,
    Group,
    List,
    Set,
    Map,
}

/// A leaf schema entry.
///
/// The flags are carried through untouched; only `attribute_type` drives
/// path resolution. Attributes declared with a nested attribute type instead
/// of `type` load as `dynamic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type", default)]
    pub attribute_type: AttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub computed: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub sensitive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

impl Attribute {
    /// An attribute with the given type and no flags set.
    pub fn of_type(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            ..Self::default()
        }
    }

    /// Copy of this attribute with a different type, keeping every flag.
    pub fn with_type(&self, attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            ..self.clone()
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
