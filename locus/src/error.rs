//! Error types for the locus library.
//!
//! This module provides the error hierarchy shared by traversal, tree loading
//! and configuration, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a locus error.
///
/// # Examples
///
/// ```
/// use locus::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the locus library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Containers return this from [`Container::lookup`] when a child key is
    /// absent; the traverser treats it as the end of the walk.
    ///
    /// [`Container::lookup`]: crate::node::Container::lookup
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A container failed while looking up a child for a reason other than
    /// the child being absent.
    #[error("lookup of '{name}' failed: {source}")]
    Lookup {
        /// The segment being looked up.
        name: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A tree document could not be turned into an object graph.
    #[error("invalid tree {}: {reason}", path.display())]
    InvalidTree {
        /// Where the document came from.
        path: PathBuf,
        /// The reason the document is invalid.
        reason: String,
    },

    /// A configuration or document parse error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::NotFound`] for a missing child key.
    ///
    /// # Examples
    ///
    /// ```
    /// use locus::Error;
    ///
    /// let err = Error::not_found("foo");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use locus::Error;
    ///
    /// let err = Error::NotFound { resource: "bar".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
