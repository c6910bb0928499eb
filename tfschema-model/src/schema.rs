use crate::{Block, Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// A multi-provider schema document, keyed by fully-qualified provider
/// address (e.g. `registry.terraform.io/hashicorp/aws`).
///
/// This is the shape printed by `terraform providers schema -json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    #[serde(default)]
    pub provider_schemas: BTreeMap<String, ProviderSchemaEntry>,
}

/// Everything one provider declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchemaEntry {
    /// The provider's own configuration block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ResourceSchema>,
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, ResourceSchema>,
    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, ResourceSchema>,
}

/// Top-level schema of a resource, data source or provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub block: Block,
}

/// Which resource table of a provider to look in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Managed,
    DataSource,
}

impl ProviderSchema {
    /// Parse a schema document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)?.checked()
    }

    /// Parse a schema document from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice::<Self>(bytes)?.checked()
    }

    /// Parse a schema document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader::<_, Self>(reader)?.checked()
    }

    /// Read and parse a schema document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Serialize back to the JSON document form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Entry for a fully-qualified provider key.
    pub fn provider(&self, key: &str) -> Option<&ProviderSchemaEntry> {
        self.provider_schemas.get(key)
    }

    /// Fully-qualified provider keys, in sorted order.
    pub fn provider_keys(&self) -> impl Iterator<Item = &str> {
        self.provider_schemas.keys().map(String::as_str)
    }

    fn checked(self) -> Result<Self> {
        if let Some(version) = &self.format_version {
            let major = version.split('.').next().unwrap_or_default();
            if major != "0" && major != "1" {
                return Err(SchemaError::UnsupportedFormatVersion(version.clone()));
            }
        }
        Ok(self)
    }
}

impl ProviderSchemaEntry {
    /// Look up a resource or data source by its fully-qualified type name
    /// (e.g. `aws_instance`).
    pub fn resource(&self, name: &str, kind: ResourceKind) -> Option<&ResourceSchema> {
        match kind {
            ResourceKind::Managed => self.resource_schemas.get(name),
            ResourceKind::DataSource => self.data_source_schemas.get(name),
        }
    }
}
