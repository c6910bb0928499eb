//! Finds the resource, data source or provider block a path starts from.

use crate::path::{AttributePath, Segment};
use crate::provider::ProviderNameResolver;
use tfschema_model::{ProviderSchema, ResourceSchema};
use tracing::debug;

/// Local names with this suffix address the provider's own configuration block.
const PROVIDER_SUFFIX: &str = "Provider";

/// The schema a path starts from and the segments still to walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Located<'s, 'a, 'p> {
    pub resource: &'s ResourceSchema,
    pub rest: &'a [Segment<'p>],
}

/// Splits the resource head off a segment list.
///
/// `aws_instance.rest` names the type in one segment; the provider is the text
/// before the first `_`. Otherwise the head spans two segments, as in
/// `aws.instance.rest` or `aws.AwsProvider`.
fn split_head<'a, 'p>(segments: &'a [Segment<'p>]) -> Option<(&'p str, &'p str, &'a [Segment<'p>])> {
    let (first, rest) = segments.split_first()?;
    if first.indexed {
        return None;
    }
    if let Some((provider, local)) = first.name.split_once('_') {
        if provider.is_empty() || local.is_empty() {
            return None;
        }
        return Some((provider, local, rest));
    }

    let (second, rest) = rest.split_first()?;
    if second.indexed {
        return None;
    }
    Some((first.name, second.name, rest))
}

pub(crate) fn locate<'s, 'a, 'p, N>(
    schema: &'s ProviderSchema,
    names: &N,
    path: &'a AttributePath<'p>,
) -> Option<Located<'s, 'a, 'p>>
where
    N: ProviderNameResolver + ?Sized,
{
    let (provider, local, rest) = split_head(path.segments())?;

    let Some(entry) = names
        .resolve(schema, provider)
        .and_then(|key| schema.provider(key))
    else {
        debug!(provider, "No provider schema for short name");
        return None;
    };

    if local.ends_with(PROVIDER_SUFFIX) {
        let Some(resource) = entry.provider.as_ref() else {
            debug!(provider, "Provider declares no configuration block");
            return None;
        };
        return Some(Located { resource, rest });
    }

    let type_name = format!("{provider}_{local}");
    let Some(resource) = entry.resource(&type_name, path.resource_kind()) else {
        debug!(
            resource = %type_name,
            data_source = path.is_data_source(),
            "Resource type not declared by provider"
        );
        return None;
    };

    if rest.is_empty() {
        return None;
    }
    Some(Located { resource, rest })
}
