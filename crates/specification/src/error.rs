//! Error types for the specification engine.

use thiserror::Error;

/// Errors raised by [`FilterEngine`](crate::FilterEngine)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// `apply` was called before a specification was configured
    #[error("Invalid argument: no specification set on the filter engine")]
    MissingSpecification,
}

pub type Result<T> = std::result::Result<T, FilterError>;
