use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("endpoint not found: {0}")]
    NotFound(String),

    #[error("invalid catalog: {0}")]
    Validation(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),
}
