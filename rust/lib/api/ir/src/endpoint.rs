//! Endpoint IR: parameter specs + endpoint descriptors.
//!
//! The serialized form (camelCase) is the catalog wire format.

use serde::{Deserialize, Serialize};

use crate::types::{HttpMethod, ParamKind, ParamType};

/// One named input an endpoint accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within its list (e.g. `productId`).
    pub name: String,

    /// Declared type.
    #[serde(rename = "type")]
    pub ty: ParamType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: String,

    /// Example input shown in the form; also the initial value of the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            description: String::new(),
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Initial raw value of the field: the placeholder, or empty.
    pub fn default_value(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }
}

/// One HTTP API operation available for snippet generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Unique id (e.g. `create-order`).
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub method: HttpMethod,

    /// Path template with `{name}` placeholders (e.g. `/v1/users/{userId}`).
    pub path: String,

    /// Parameters bound into the path (and optionally the query string).
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Parameters bound into the request body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_parameters: Vec<ParameterSpec>,
}

impl EndpointDescriptor {
    /// Parameter list for the given kind.
    pub fn params(&self, kind: ParamKind) -> &[ParameterSpec] {
        match kind {
            ParamKind::Path => &self.parameters,
            ParamKind::Body => &self.body_parameters,
        }
    }

    /// Look up a parameter spec by name within one list.
    pub fn param(&self, kind: ParamKind, name: &str) -> Option<&ParameterSpec> {
        self.params(kind).iter().find(|p| p.name == name)
    }

    /// True when a synthesized request carries a body.
    pub fn has_body(&self) -> bool {
        self.method.carries_body() && !self.body_parameters.is_empty()
    }

    /// True when the endpoint takes no input at all.
    pub fn takes_no_parameters(&self) -> bool {
        self.parameters.is_empty() && self.body_parameters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_inventory() -> EndpointDescriptor {
        EndpointDescriptor {
            id: "update-inventory".into(),
            name: "Update Inventory".into(),
            description: "Updates the stock level for a product.".into(),
            method: HttpMethod::Put,
            path: "/v1/products/{productId}/inventory".into(),
            parameters: vec![ParameterSpec::new("productId", ParamType::String)
                .required()
                .placeholder("prod_xyz")],
            body_parameters: vec![
                ParameterSpec::new("quantity", ParamType::Number).required().placeholder("100"),
                ParameterSpec::new("locationId", ParamType::String).placeholder("wh_1"),
            ],
        }
    }

    #[test]
    fn camel_case_wire_format() {
        let json = serde_json::to_value(update_inventory()).unwrap();
        assert_eq!(json["bodyParameters"][0]["type"], "number");
        assert_eq!(json["method"], "PUT");
        assert!(json["parameters"][0].get("placeholder").is_some());
    }

    #[test]
    fn optional_fields_default() {
        let ep: EndpointDescriptor = serde_json::from_str(
            r#"{"id":"list-media-partners","name":"List Media Partners","method":"GET","path":"/MediaPartners",
                "parameters":[{"name":"Page","type":"number"}]}"#,
        )
        .unwrap();
        assert!(ep.body_parameters.is_empty());
        assert!(!ep.parameters[0].required);
        assert_eq!(ep.parameters[0].default_value(), "");
        assert!(!ep.has_body());
    }

    #[test]
    fn lookup_by_kind() {
        let ep = update_inventory();
        assert_eq!(ep.params(ParamKind::Body).len(), 2);
        assert_eq!(ep.param(ParamKind::Path, "productId").unwrap().default_value(), "prod_xyz");
        assert!(ep.param(ParamKind::Path, "quantity").is_none());
        assert!(ep.has_body());
        assert!(!ep.takes_no_parameters());
    }

    #[test]
    fn get_never_has_body() {
        let mut ep = update_inventory();
        ep.method = HttpMethod::Get;
        assert!(!ep.has_body());
    }
}
