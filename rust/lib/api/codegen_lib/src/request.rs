//! Request planning: everything a snippet needs, before any text is written.

use explorer_ir::{EndpointDescriptor, HttpMethod, PathTemplate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coerce::{coerce_body_value, try_coerce_body_value, DecodeError};
use crate::path_template::{render_query, render_template};
use crate::value::Value;
use crate::values::{ParameterValues, ValueMap};

pub const DEFAULT_BASE_URL: &str = "https://your-api-domain.com";
pub const DEFAULT_TOKEN_PLACEHOLDER: &str = "YOUR_ACCESS_TOKEN";

/// Knobs for snippet generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetOptions {
    /// Prefix of every generated URL.
    pub base_url: String,

    /// Token text in the `Authorization: Bearer ...` header.
    pub token_placeholder: String,

    /// Append path parameters without a placeholder as a query string.
    /// Off by default: such parameters are left out of the URL.
    pub append_query: bool,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_placeholder: DEFAULT_TOKEN_PLACEHOLDER.to_string(),
            append_query: false,
        }
    }
}

/// A fully resolved HTTP call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestPlan {
    pub method: HttpMethod,
    /// Rendered path (plus query string when enabled).
    pub path: String,
    /// `base_url` + `path`.
    pub url: String,
    pub headers: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Plan a request. Undecodable structured literals fall back to raw strings.
pub fn plan_request(ep: &EndpointDescriptor, values: &ParameterValues, options: &SnippetOptions) -> RequestPlan {
    assemble(ep, &values.path, options, build_body(ep, &values.body))
}

/// Plan a request, failing on the first undecodable structured literal.
pub fn try_plan_request(
    ep: &EndpointDescriptor,
    values: &ParameterValues,
    options: &SnippetOptions,
) -> Result<RequestPlan, DecodeError> {
    let body = try_build_body(ep, &values.body)?;
    Ok(assemble(ep, &values.path, options, body))
}

/// Body object in `bodyParameters` order; `None` unless the method is
/// POST/PUT and the endpoint declares body parameters.
pub fn build_body(ep: &EndpointDescriptor, values: &ValueMap) -> Option<Value> {
    if !ep.has_body() {
        return None;
    }
    let body: IndexMap<String, Value> = ep
        .body_parameters
        .iter()
        .map(|spec| (spec.name.clone(), coerce_body_value(spec, raw_value(values, &spec.name))))
        .collect();
    Some(Value::Object(body))
}

pub fn try_build_body(ep: &EndpointDescriptor, values: &ValueMap) -> Result<Option<Value>, DecodeError> {
    if !ep.has_body() {
        return Ok(None);
    }
    let mut body = IndexMap::new();
    for spec in &ep.body_parameters {
        let value = try_coerce_body_value(spec, raw_value(values, &spec.name))?;
        body.insert(spec.name.clone(), value);
    }
    Ok(Some(Value::Object(body)))
}

fn raw_value<'v>(values: &'v ValueMap, name: &str) -> &'v str {
    values.get(name).map(String::as_str).unwrap_or("")
}

fn assemble(ep: &EndpointDescriptor, path_values: &ValueMap, options: &SnippetOptions, body: Option<Value>) -> RequestPlan {
    let template = PathTemplate::parse(&ep.path);
    let mut path = render_template(&template, &ep.parameters, path_values);
    if options.append_query {
        if let Some(query) = render_query(&template, &ep.parameters, path_values) {
            path.push('?');
            path.push_str(&query);
        }
    }
    let url = format!("{}{}", options.base_url.trim_end_matches('/'), path);

    RequestPlan {
        method: ep.method,
        path,
        url,
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Bearer {}", options.token_placeholder)),
        ],
        body,
    }
}
