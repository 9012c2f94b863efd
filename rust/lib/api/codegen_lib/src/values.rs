//! Parameter value store: raw form input for the selected endpoint.

use std::collections::BTreeMap;

use explorer_ir::{EndpointDescriptor, ParamKind, ParameterSpec};

/// Parameter name → raw string as typed by the user.
pub type ValueMap = BTreeMap<String, String>;

/// Raw values for both parameter lists of one endpoint.
///
/// No validation happens here; values are interpreted at generation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterValues {
    pub path: ValueMap,
    pub body: ValueMap,
}

impl ParameterValues {
    /// Fresh values for `descriptor`: every field starts at its placeholder
    /// (or empty).
    pub fn for_endpoint(descriptor: &EndpointDescriptor) -> Self {
        let mut values = Self::default();
        values.initialize(descriptor);
        values
    }

    /// Replace all state with the defaults of `descriptor`. Nothing from a
    /// previously selected endpoint survives.
    pub fn initialize(&mut self, descriptor: &EndpointDescriptor) {
        self.path = defaults(&descriptor.parameters);
        self.body = defaults(&descriptor.body_parameters);
    }

    /// Overwrite the raw value of one parameter.
    pub fn set(&mut self, kind: ParamKind, name: impl Into<String>, raw: impl Into<String>) {
        self.map_mut(kind).insert(name.into(), raw.into());
    }

    pub fn get(&self, kind: ParamKind, name: &str) -> Option<&str> {
        self.map(kind).get(name).map(String::as_str)
    }

    pub fn map(&self, kind: ParamKind) -> &ValueMap {
        match kind {
            ParamKind::Path => &self.path,
            ParamKind::Body => &self.body,
        }
    }

    fn map_mut(&mut self, kind: ParamKind) -> &mut ValueMap {
        match kind {
            ParamKind::Path => &mut self.path,
            ParamKind::Body => &mut self.body,
        }
    }
}

fn defaults(specs: &[ParameterSpec]) -> ValueMap {
    specs
        .iter()
        .map(|p| (p.name.clone(), p.default_value().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_catalog::Catalog;

    #[test]
    fn initialized_from_placeholders() {
        let catalog = Catalog::builtin();
        let values = ParameterValues::for_endpoint(catalog.select("update-inventory").unwrap());
        assert_eq!(values.get(ParamKind::Path, "productId"), Some("prod_xyz"));
        assert_eq!(values.get(ParamKind::Body, "quantity"), Some("100"));
        assert_eq!(values.get(ParamKind::Body, "locationId"), Some("wh_1"));
        assert_eq!(values.get(ParamKind::Path, "quantity"), None);
    }

    #[test]
    fn missing_placeholder_starts_empty() {
        let ep: EndpointDescriptor = EndpointDescriptor {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            method: explorer_ir::HttpMethod::Get,
            path: "/x/{id}".into(),
            parameters: vec![ParameterSpec::new("id", explorer_ir::ParamType::String)],
            body_parameters: vec![],
        };
        let values = ParameterValues::for_endpoint(&ep);
        assert_eq!(values.get(ParamKind::Path, "id"), Some(""));
        assert!(values.body.is_empty());
    }

    #[test]
    fn reinitialize_drops_previous_values() {
        let catalog = Catalog::builtin();
        let mut values = ParameterValues::for_endpoint(catalog.select("create-order").unwrap());
        values.set(ParamKind::Body, "customerId", "cust_1");

        values.initialize(catalog.select("get-user-details").unwrap());
        assert!(values.body.is_empty());
        assert_eq!(values.path.len(), 1);
        assert_eq!(values.get(ParamKind::Path, "userId"), Some("user_123"));
    }

    #[test]
    fn set_overwrites_one_list_only() {
        let catalog = Catalog::builtin();
        let mut values = ParameterValues::for_endpoint(catalog.select("update-inventory").unwrap());
        values.set(ParamKind::Body, "quantity", "7");
        assert_eq!(values.get(ParamKind::Body, "quantity"), Some("7"));
        assert_eq!(values.get(ParamKind::Path, "productId"), Some("prod_xyz"));
    }
}
