use crate::attribute::resolve_attribute;
use crate::block::{BlockNode, descend};
use crate::classify::classify;
use crate::locator::locate;
use crate::path::AttributePath;
use crate::provider::{ProviderNameResolver, RegistryNameResolver};
use crate::scope::Scope;
use crate::type_at_path::{TypeAtPath, type_at_path};
use std::borrow::Cow;
use tfschema_model::{Attribute, AttributeType, ProviderSchema};

/// A provider schema paired with the provider name resolver used to read it.
///
/// Holds no state between calls and is `Send + Sync` whenever the name
/// resolver is, so one instance can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'s, N = RegistryNameResolver> {
    schema: &'s ProviderSchema,
    names: N,
}

impl<'s> SchemaResolver<'s> {
    pub fn new(schema: &'s ProviderSchema) -> Self {
        Self::with_names(schema, RegistryNameResolver)
    }
}

impl<'s, N: ProviderNameResolver> SchemaResolver<'s, N> {
    pub fn with_names(schema: &'s ProviderSchema, names: N) -> Self {
        Self { schema, names }
    }

    /// The nested block a path names, walking block types only.
    pub fn block_at_path(&self, path: &str) -> Option<BlockNode<'s>> {
        let path = AttributePath::parse(path)?;
        let located = locate(self.schema, &self.names, &path)?;
        descend(located.resource, located.rest)
    }

    /// The attribute named by the single segment after the resource.
    pub fn attribute_at_path(&self, path: &str) -> Option<Cow<'s, Attribute>> {
        let path = AttributePath::parse(path)?;
        let located = locate(self.schema, &self.names, &path)?;
        resolve_attribute(&located.resource.block, located.rest)
    }

    /// Whatever a path leads to: a schema root, a nested block, or a type.
    pub fn type_at_path(&self, path: &str) -> Option<TypeAtPath<'s>> {
        let path = AttributePath::parse(path)?;
        let located = locate(self.schema, &self.names, &path)?;
        type_at_path(located.resource, located.rest)
    }

    /// The type to emit for `path`; never absent.
    pub fn classify_desired_type(&self, path: &str) -> AttributeType {
        classify(self.type_at_path(path), path)
    }
}

impl<N: ProviderNameResolver> Scope for SchemaResolver<'_, N> {
    fn provider_schema(&self) -> &ProviderSchema {
        self.schema
    }

    fn provider_names(&self) -> &dyn ProviderNameResolver {
        &self.names
    }
}

/// See [`SchemaResolver::block_at_path`].
pub fn resolve_block_at_path<'s>(schema: &'s ProviderSchema, path: &str) -> Option<BlockNode<'s>> {
    SchemaResolver::new(schema).block_at_path(path)
}

/// See [`SchemaResolver::attribute_at_path`].
pub fn resolve_attribute_at_path<'s>(
    schema: &'s ProviderSchema,
    path: &str,
) -> Option<Cow<'s, Attribute>> {
    SchemaResolver::new(schema).attribute_at_path(path)
}

/// See [`SchemaResolver::type_at_path`].
pub fn resolve_type_at_path<'s>(schema: &'s ProviderSchema, path: &str) -> Option<TypeAtPath<'s>> {
    SchemaResolver::new(schema).type_at_path(path)
}

/// The type the code generator should use for `path` in `scope`.
///
/// Returns [`AttributeType::DYNAMIC`] whenever the path does not end on an
/// attribute type.
pub fn classify_desired_type<S: Scope + ?Sized>(scope: &S, path: &str) -> AttributeType {
    SchemaResolver::with_names(scope.provider_schema(), scope.provider_names())
        .classify_desired_type(path)
}
