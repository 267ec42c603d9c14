use thiserror::Error;

/// Errors raised by element lookups and geometry queries.
///
/// A [`ChemError::NotFound`] usually means a fragment can be skipped, while
/// [`ChemError::TooMany`] and [`ChemError::InvalidArgument`] point at bad input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChemError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{count} {what} found where 1 was expected")]
    TooMany { what: String, count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
