//! Attribute path resolution over provider schemas.
//!
//! Given a path such as `aws_instance.tags[]` or `data.aws_ami.id`, finds the
//! schema entry it names and reports its type. A resolution is one stateless
//! pass:
//!
//! 1. split the path into segments ([`AttributePath`]),
//! 2. locate the provider, resource or data source the path starts from,
//! 3. walk nested blocks, attributes and object members,
//! 4. classify the result for the code generator.
//!
//! Every entry point signals "not found" with `None` rather than an error;
//! [`classify_desired_type`] goes one step further and falls back to
//! [`AttributeType::DYNAMIC`]. Provider short names are mapped to schema keys
//! through [`ProviderNameResolver`].

mod attribute;
mod block;
mod classify;
mod locator;
mod path;
mod provider;
mod resolver;
mod scope;
mod type_at_path;

pub use block::BlockNode;
pub use path::{AttributePath, Segment};
pub use provider::{ProviderNameResolver, RegistryNameResolver};
pub use resolver::{
    SchemaResolver, classify_desired_type, resolve_attribute_at_path, resolve_block_at_path,
    resolve_type_at_path,
};
pub use scope::Scope;
pub use type_at_path::TypeAtPath;

pub use tfschema_model::{
    Attribute, AttributeType, BlockType, CollectionKind, NestingMode, PrimitiveType, ProviderSchema,
    ResourceSchema,
};
