use std::fs;
use std::path::Path;

use explorer_ir::EndpointDescriptor;
use tracing::debug;

use crate::error::CatalogError;

/// Latest catalog document version understood by the loader.
pub const CATALOG_VERSION: u32 = 1;

/// On-disk catalog document.
///
/// Either a bare array of endpoint descriptors, or a versioned document:
///
/// ```text
/// version: 1
/// endpoints:
///   - id: get-user-details
///     name: Get User Details
///     method: GET
///     path: /v1/users/{userId}
///     parameters:
///       - { name: userId, type: string, required: true }
/// ```
///
/// The document shape and `version` are checked before any descriptor is
/// decoded, so a malformed descriptor reports its own field error.
#[derive(Debug, Clone)]
pub enum CatalogFile {
    Versioned {
        version: u32,
        endpoints: Vec<EndpointDescriptor>,
    },
    Bare(Vec<EndpointDescriptor>),
}

/// Top-level shape of a parsed document, before the descriptors are decoded.
enum Shape<V> {
    List(V),
    Document {
        /// `None`: key missing. `Some(None)`: not an unsigned integer.
        version: Option<Option<u64>>,
        endpoints: Option<V>,
    },
    Other,
}

impl CatalogFile {
    /// Read a catalog file. The extension selects the parser:
    /// `.json` → JSON, `.yaml` / `.yml` → YAML.
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        let format = Format::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        debug!("CatalogFile: read {} bytes from {:?}", content.len(), path);
        match format {
            Format::Json => Self::from_json_str(&content),
            Format::Yaml => Self::from_yaml_str(&content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        use serde_json::Value;

        let doc: Value = serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let shape = match doc {
            Value::Array(items) => Shape::List(Value::Array(items)),
            Value::Object(mut map) => Shape::Document {
                version: map.get("version").map(Value::as_u64),
                endpoints: map.remove("endpoints"),
            },
            _ => Shape::Other,
        };
        Self::from_shape(shape, |v| serde_json::from_value(v).map_err(|e| e.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        use serde_yaml::Value;

        let doc: Value = serde_yaml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let shape = match doc {
            Value::Sequence(items) => Shape::List(Value::Sequence(items)),
            Value::Mapping(mut map) => Shape::Document {
                version: map.get("version").map(Value::as_u64),
                endpoints: map.remove("endpoints"),
            },
            _ => Shape::Other,
        };
        Self::from_shape(shape, |v| serde_yaml::from_value(v).map_err(|e| e.to_string()))
    }

    fn from_shape<V>(
        shape: Shape<V>,
        decode: impl FnOnce(V) -> Result<Vec<EndpointDescriptor>, String>,
    ) -> Result<Self, CatalogError> {
        match shape {
            Shape::List(items) => Ok(CatalogFile::Bare(decode(items).map_err(CatalogError::Parse)?)),
            Shape::Document { version, endpoints } => {
                let version = match version {
                    Some(Some(v)) => v,
                    Some(None) => {
                        return Err(CatalogError::Parse("`version` must be an unsigned integer".into()))
                    }
                    None => return Err(CatalogError::Parse("missing `version`".into())),
                };
                if version != u64::from(CATALOG_VERSION) {
                    return Err(CatalogError::UnsupportedFormat(format!(
                        "catalog version {} (supported: {})",
                        version, CATALOG_VERSION
                    )));
                }
                let endpoints = endpoints.ok_or_else(|| CatalogError::Parse("missing `endpoints`".into()))?;
                let endpoints = decode(endpoints).map_err(|e| CatalogError::Parse(format!("endpoints: {}", e)))?;
                Ok(CatalogFile::Versioned {
                    version: CATALOG_VERSION,
                    endpoints,
                })
            }
            Shape::Other => Err(CatalogError::Parse(
                "expected a list of endpoints or a `version` / `endpoints` document".into(),
            )),
        }
    }

    /// Unwrap the endpoint list.
    pub fn into_endpoints(self) -> Vec<EndpointDescriptor> {
        match self {
            CatalogFile::Bare(endpoints) => endpoints,
            CatalogFile::Versioned { endpoints, .. } => endpoints,
        }
    }
}

enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            other => Err(CatalogError::UnsupportedFormat(format!(
                "{}: expected .json, .yaml or .yml, got {:?}",
                path.display(),
                other.unwrap_or("")
            ))),
        }
    }
}
