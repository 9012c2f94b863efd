pub mod endpoint;
pub mod snippet;
