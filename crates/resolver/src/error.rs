use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors from the path-resolution boundary.
///
/// Resolution failures propagate to the caller unchanged; nothing here
/// is retried or partially recovered.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid search root: {0}")]
    InvalidRoot(String),

    #[error("Background walk task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
