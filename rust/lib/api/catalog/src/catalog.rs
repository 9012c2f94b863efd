use std::collections::HashMap;
use std::path::Path;

use explorer_ir::EndpointDescriptor;
use tracing::{debug, warn};

use crate::builtin;
use crate::error::CatalogError;
use crate::loader::CatalogFile;
use crate::sort::TableSort;
use crate::validate::validate_endpoints;

/// Catalog is the read-only, ordered registry of endpoint descriptors.
///
/// Construction validates the descriptors; afterwards the catalog is only
/// read. Order is the order the endpoints were defined in.
#[derive(Debug, Clone)]
pub struct Catalog {
    endpoints: Vec<EndpointDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting descriptors that fail validation.
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Result<Self, CatalogError> {
        let errors = validate_endpoints(&endpoints);
        if !errors.is_empty() {
            for e in &errors {
                warn!("Catalog: {}", e);
            }
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CatalogError::Validation(message));
        }
        Ok(Self::from_validated(endpoints))
    }

    /// The catalog shipped with the explorer.
    pub fn builtin() -> Self {
        // Covered by builtin::tests::builtin_catalog_is_valid.
        Self::from_validated(builtin::endpoints())
    }

    /// Load and validate a catalog file (`.json`, `.yaml`, `.yml`).
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let endpoints = CatalogFile::read(path)?.into_endpoints();
        let catalog = Self::new(endpoints)?;
        debug!("Catalog: loaded {} endpoints from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    fn from_validated(endpoints: Vec<EndpointDescriptor>) -> Self {
        let index = endpoints
            .iter()
            .enumerate()
            .map(|(i, ep)| (ep.id.clone(), i))
            .collect();
        Self { endpoints, index }
    }

    /// All endpoints in definition order.
    pub fn list(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// Look up an endpoint by id.
    pub fn select(&self, id: &str) -> Result<&EndpointDescriptor, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<&EndpointDescriptor> {
        self.index.get(id).map(|&i| &self.endpoints[i])
    }

    /// Endpoints ordered for a table view.
    pub fn sorted(&self, sort: TableSort) -> Vec<&EndpointDescriptor> {
        sort.apply(&self.endpoints)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
