// File: crates/plot-core/src/error.rs
// Summary: Error type for plot construction and series management.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    /// Malformed input to a plot call. The plot is left unchanged.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PlotError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
