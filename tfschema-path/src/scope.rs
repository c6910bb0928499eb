use crate::provider::{ProviderNameResolver, RegistryNameResolver};
use tfschema_model::ProviderSchema;

/// Conversion context handed to [`classify_desired_type`](crate::classify_desired_type).
///
/// Only the active schema is required. Override [`provider_names`](Self::provider_names)
/// when short provider names need custom alias handling.
pub trait Scope {
    fn provider_schema(&self) -> &ProviderSchema;

    fn provider_names(&self) -> &dyn ProviderNameResolver {
        &RegistryNameResolver
    }
}

impl Scope for ProviderSchema {
    fn provider_schema(&self) -> &ProviderSchema {
        self
    }
}
