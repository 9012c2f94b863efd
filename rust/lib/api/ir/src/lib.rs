//! Impact Explorer endpoint IR
//!
//! Plain data structures shared between:
//! - catalog (built-in registry + catalog files)
//! - codegen library (coercion, path templating, snippet synthesis)
//! - CLI (listing and describing endpoints)
//!
//! Three layers:
//! 1. Types    - parameter types, HTTP methods, parameter kinds
//! 2. Path     - tokenized path templates
//! 3. Endpoint - parameter specs + endpoint descriptors

pub mod types;
pub mod path;
pub mod endpoint;

pub use types::*;
pub use path::*;
pub use endpoint::*;
