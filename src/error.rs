//! Errors raised by collection pipelines
//!
//! Every operation in this crate returns `Result<_, PipelineError>`. The error
//! distinguishes caller mistakes (an absent or empty collection) from faults
//! raised inside a transformation chain, which are reported as
//! [`PipelineError::OperationFailed`] carrying the original error as their cause.
//!
//! # Examples
//!
//! ```
//! use gently::PipelineError;
//!
//! let err = PipelineError::failed_with(
//!     "failed to sort fruits",
//!     PipelineError::empty("fruits"),
//! );
//!
//! assert!(err.is_operation_failed());
//! assert_eq!(
//!     err.to_string(),
//!     "failed to sort fruits: fruits collection cannot be empty"
//! );
//! assert_eq!(err.chain().count(), 2);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Error produced by a collection pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The collection reference the operation needs is absent.
    MissingCollection {
        /// Name of the collection.
        name: &'static str,
    },
    /// The collection is present but has no elements, and the operation
    /// cannot produce a result from nothing.
    EmptyCollection {
        /// Name of the collection.
        name: &'static str,
    },
    /// A step that cannot tolerate nulls met one.
    ///
    /// Never returned on its own by [`Datasets`](crate::Datasets); it shows up
    /// as the cause of an [`OperationFailed`](PipelineError::OperationFailed).
    NullElement {
        /// Name of the collection.
        name: &'static str,
        /// Position of the null entry in the source collection.
        index: usize,
    },
    /// A transformation step failed.
    OperationFailed {
        /// What the operation was trying to do.
        message: String,
        /// The failure that triggered this one, if any.
        cause: Option<Box<PipelineError>>,
    },
}

impl PipelineError {
    /// Create a missing-collection error.
    pub fn missing(name: &'static str) -> Self {
        PipelineError::MissingCollection { name }
    }

    /// Create an empty-collection error.
    pub fn empty(name: &'static str) -> Self {
        PipelineError::EmptyCollection { name }
    }

    /// Create a null-element error.
    pub fn null_element(name: &'static str, index: usize) -> Self {
        PipelineError::NullElement { name, index }
    }

    /// Create an operation failure without a cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use gently::PipelineError;
    ///
    /// let err = PipelineError::failed("no valid values to average");
    /// assert_eq!(err.to_string(), "no valid values to average");
    /// assert!(std::error::Error::source(&err).is_none());
    /// ```
    pub fn failed(message: impl Into<String>) -> Self {
        PipelineError::OperationFailed {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an operation failure wrapping `cause`.
    pub fn failed_with(message: impl Into<String>, cause: PipelineError) -> Self {
        PipelineError::OperationFailed {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns true for [`PipelineError::MissingCollection`].
    pub fn is_missing_collection(&self) -> bool {
        matches!(self, PipelineError::MissingCollection { .. })
    }

    /// Returns true for [`PipelineError::EmptyCollection`].
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, PipelineError::EmptyCollection { .. })
    }

    /// Returns true for [`PipelineError::OperationFailed`].
    pub fn is_operation_failed(&self) -> bool {
        matches!(self, PipelineError::OperationFailed { .. })
    }

    /// The wrapped cause of an operation failure.
    pub fn cause(&self) -> Option<&PipelineError> {
        match self {
            PipelineError::OperationFailed { cause, .. } => cause.as_deref(),
            _ => None,
        }
    }

    /// Iterate over this error followed by each cause, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use gently::PipelineError;
    ///
    /// let err = PipelineError::failed_with(
    ///     "outer",
    ///     PipelineError::failed_with("inner", PipelineError::missing("veggies")),
    /// );
    ///
    /// let last = err.chain().last().unwrap();
    /// assert!(last.is_missing_collection());
    /// ```
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost error in the cause chain.
    pub fn root_cause(&self) -> &PipelineError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

/// Iterator over an error and its causes.
///
/// Created by [`PipelineError::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a PipelineError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a PipelineError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::MissingCollection { name } => {
                write!(f, "{} collection cannot be absent", name)
            }
            PipelineError::EmptyCollection { name } => {
                write!(f, "{} collection cannot be empty", name)
            }
            PipelineError::NullElement { name, index } => {
                write!(f, "{} collection has a null element at index {}", name, index)
            }
            PipelineError::OperationFailed { message, cause } => {
                write!(f, "{}", message)?;
                if let Some(cause) = cause {
                    write!(f, ": {}", cause)?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for PipelineError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            PipelineError::OperationFailed {
                cause: Some(cause), ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
