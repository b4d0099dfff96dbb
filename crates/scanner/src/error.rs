use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScannerError>;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path resolution error: {0}")]
    Resolve(#[from] tailor_resolver::ResolveError),
}
