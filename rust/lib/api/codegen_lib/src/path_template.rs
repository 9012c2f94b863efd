//! Path templating: fills `{name}` placeholders with raw path-parameter values.
//!
//! The template is tokenized once (see [`PathTemplate`]) and substituted by
//! segment, so a parameter name that is a substring of another one, or a
//! value containing braces, cannot disturb other placeholders. Every
//! occurrence of a placeholder is substituted.

use explorer_ir::{ParameterSpec, PathTemplate, Segment};

use crate::values::ValueMap;

/// Render `template` with the values of `params`.
///
/// An empty or missing value keeps the placeholder text (`{name}`) so the
/// unfilled field stays visible. Placeholders with no matching parameter are
/// kept as well. Values are inserted verbatim.
pub fn render(template: &str, params: &[ParameterSpec], values: &ValueMap) -> String {
    render_template(&PathTemplate::parse(template), params, values)
}

pub fn render_template(template: &PathTemplate, params: &[ParameterSpec], values: &ValueMap) -> String {
    let mut out = String::new();
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match filled_value(name, params, values) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}

/// Query string for the parameters that have no placeholder in `template`
/// and a non-empty value, in declaration order. `None` when there are none.
pub fn render_query(template: &PathTemplate, params: &[ParameterSpec], values: &ValueMap) -> Option<String> {
    let pairs: Vec<String> = params
        .iter()
        .filter(|p| !template.has_placeholder(&p.name))
        .filter_map(|p| {
            filled_value(&p.name, params, values).map(|v| {
                format!("{}={}", urlencoding::encode(&p.name), urlencoding::encode(v))
            })
        })
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("&"))
    }
}

fn filled_value<'v>(name: &str, params: &[ParameterSpec], values: &'v ValueMap) -> Option<&'v str> {
    if !params.iter().any(|p| p.name == name) {
        return None;
    }
    values
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}
