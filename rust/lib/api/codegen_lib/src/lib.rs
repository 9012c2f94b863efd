//! Codegen Library - snippet generation for catalog endpoints
//!
//! Turns an endpoint descriptor plus raw form input into a runnable
//! JavaScript `fetch` snippet:
//!
//! raw values → coercion (body) / path templating (path) → RequestPlan → snippet text

pub mod coerce;
pub mod javascript_fetch;
pub mod path_template;
pub mod request;
pub mod session;
pub mod value;
pub mod values;

use explorer_ir::EndpointDescriptor;

pub use coerce::{coerce_body_value, parse_float, try_coerce_body_value, DecodeError};
pub use request::{plan_request, try_plan_request, RequestPlan, SnippetOptions};
pub use session::ExplorerSession;
pub use value::Value;
pub use values::{ParameterValues, ValueMap};

/// One-shot generation: plan the request for `values` and render it.
/// Never fails; undecodable structured literals are kept as strings.
pub fn generate_snippet(ep: &EndpointDescriptor, values: &ParameterValues, options: &SnippetOptions) -> String {
    javascript_fetch::generate(&plan_request(ep, values, options))
}
