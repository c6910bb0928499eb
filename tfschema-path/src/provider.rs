use tfschema_model::ProviderSchema;
use tracing::debug;

/// Maps a provider short name (`aws`) to its fully-qualified schema key
/// (`registry.terraform.io/hashicorp/aws`).
///
/// Implement this when provider aliases or version pins decide which schema
/// entry a reference should use. [`RegistryNameResolver`] covers the common case.
pub trait ProviderNameResolver: Send + Sync {
    fn resolve<'s>(&self, schema: &'s ProviderSchema, short_name: &str) -> Option<&'s str>;
}

impl<T: ProviderNameResolver + ?Sized> ProviderNameResolver for &T {
    fn resolve<'s>(&self, schema: &'s ProviderSchema, short_name: &str) -> Option<&'s str> {
        (**self).resolve(schema, short_name)
    }
}

/// Matches registry addresses by their final component.
///
/// An exact key wins outright. Otherwise the key whose last `/` component
/// equals the short name is used; among several, the `hashicorp` namespace
/// is preferred and any other tie resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryNameResolver;

const PREFERRED_NAMESPACE: &str = "hashicorp";

impl ProviderNameResolver for RegistryNameResolver {
    fn resolve<'s>(&self, schema: &'s ProviderSchema, short_name: &str) -> Option<&'s str> {
        if let Some((key, _)) = schema.provider_schemas.get_key_value(short_name) {
            return Some(key.as_str());
        }

        let candidates: Vec<&'s str> = schema
            .provider_keys()
            .filter(|key| key.rsplit('/').next() == Some(short_name))
            .collect();

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            several => {
                let preferred = several
                    .iter()
                    .find(|key| key.rsplit('/').nth(1) == Some(PREFERRED_NAMESPACE))
                    .copied();
                if preferred.is_none() {
                    debug!(
                        provider = short_name,
                        candidates = ?several,
                        "Ambiguous provider short name"
                    );
                }
                preferred
            }
        }
    }
}
