//! Catalog consistency checks:
//! - Endpoint ids must be unique
//! - Parameter names must be unique within each list
//! - Paths must start with `/` and contain only well-formed `{name}` placeholders
//! - Every `{name}` placeholder in a path must resolve to exactly one path parameter

use std::collections::HashSet;

use explorer_ir::*;

/// A validation error with a descriptive message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// Which part of the descriptor produced the error (endpoint, path, parameters, bodyParameters).
    pub layer: String,
    /// Which endpoint the error is about.
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}] {}", self.layer, self.context, self.message)
    }
}

/// Validate a whole endpoint list.
/// Returns all errors found (does not stop at first error).
pub fn validate_endpoints(endpoints: &[EndpointDescriptor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for ep in endpoints {
        if ep.id.is_empty() {
            errors.push(ValidationError {
                message: format!("endpoint '{}' has an empty id", ep.name),
                layer: "endpoint".into(),
                context: ep.name.clone(),
            });
        } else if !ids.insert(ep.id.as_str()) {
            errors.push(ValidationError {
                message: format!("duplicate endpoint id '{}'", ep.id),
                layer: "endpoint".into(),
                context: ep.id.clone(),
            });
        }

        errors.extend(validate_unique_names(ep, ParamKind::Path));
        errors.extend(validate_unique_names(ep, ParamKind::Body));
        errors.extend(validate_path(ep));
    }

    errors
}

fn validate_unique_names(ep: &EndpointDescriptor, kind: ParamKind) -> Vec<ValidationError> {
    let layer = match kind {
        ParamKind::Path => "parameters",
        ParamKind::Body => "bodyParameters",
    };
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for param in ep.params(kind) {
        if param.name.is_empty() {
            errors.push(ValidationError {
                message: "parameter with empty name".into(),
                layer: layer.into(),
                context: ep.id.clone(),
            });
        } else if !seen.insert(param.name.as_str()) {
            errors.push(ValidationError {
                message: format!("duplicate parameter '{}'", param.name),
                layer: layer.into(),
                context: ep.id.clone(),
            });
        }
    }

    errors
}

fn validate_path(ep: &EndpointDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !ep.path.starts_with('/') {
        errors.push(ValidationError {
            message: format!("path '{}' must start with '/'", ep.path),
            layer: "path".into(),
            context: ep.id.clone(),
        });
    }

    let template = PathTemplate::parse(&ep.path);

    // Parsing keeps `{}` and unbalanced braces as literal text.
    let stray_brace = template.segments().iter().any(|s| match s {
        Segment::Literal(text) => text.contains(&['{', '}'][..]),
        Segment::Placeholder(_) => false,
    });
    if stray_brace {
        errors.push(ValidationError {
            message: format!("path '{}' has a malformed placeholder (empty or unbalanced braces)", ep.path),
            layer: "path".into(),
            context: ep.id.clone(),
        });
    }

    let mut reported = HashSet::new();
    for name in template.placeholders() {
        let matches = ep.parameters.iter().filter(|p| p.name == name).count();
        if matches != 1 && reported.insert(name) {
            errors.push(ValidationError {
                message: format!(
                    "placeholder '{{{}}}' matches {} path parameters, expected exactly one",
                    name, matches
                ),
                layer: "path".into(),
                context: ep.id.clone(),
            });
        }
    }

    errors
}
