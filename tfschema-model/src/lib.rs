//! Provider schema model.
//!
//! Typed mirror of the document produced by `terraform providers schema -json`:
//! - [`ProviderSchema`] — provider address → [`ProviderSchemaEntry`]
//! - [`ResourceSchema`] — a versioned top-level [`Block`]
//! - [`BlockType`] — a nested block with its nesting mode and cardinality
//! - [`Attribute`] / [`AttributeType`] — leaf entries and their declared types
//!
//! All types are plain data. They are loaded once and shared read-only by
//! the path resolver in `tfschema-path`.

mod attribute_type;
mod block;
mod error;
mod schema;

pub use attribute_type::{AttributeType, CollectionKind, PrimitiveType};
pub use block::{Attribute, Block, BlockType, NestingMode};
pub use error::{Result, SchemaError};
pub use schema::{ProviderSchema, ProviderSchemaEntry, ResourceKind, ResourceSchema};
