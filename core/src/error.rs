//! Errors raised by sequence transforms.
//!
//! [`SequenceError`] covers problems with the input itself and never depends on
//! the caller's callback. [`TransformError`] adds the callback's own error type,
//! which is carried through unmodified.

use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Input-level failures, raised before or independently of any callback.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The input is not a usable sequence: it is absent, or it has no element
    /// at an index below its reported length.
    #[diagnostic(
        code(seqxform::invalid_input),
        help("a sequence must provide an element for every index below its length")
    )]
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String, index: Option<usize> },

    /// The input is longer than the configured `max_len`.
    #[diagnostic(
        code(seqxform::resource_exceeded),
        help("raise `TransformOptions::max_len` or split the input")
    )]
    #[error("sequence of length {len} exceeds the limit of {limit} elements")]
    ResourceExceeded { len: usize, limit: usize },
}

impl SequenceError {
    /// Index of the offending slot, if the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            SequenceError::InvalidInput { index, .. } => *index,
            SequenceError::ResourceExceeded { .. } => None,
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            SequenceError::InvalidInput { .. } => "seqxform::invalid_input",
            SequenceError::ResourceExceeded { .. } => "seqxform::resource_exceeded",
        }
    }
}

/// Failure of a fallible transform.
///
/// `E` is whatever the caller's callback returns in its `Err` arm. It is never
/// wrapped, converted or inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError<E> {
    /// The input was rejected before or while iterating.
    Sequence(SequenceError),

    /// The callback failed on the element at `index`. The transform stopped
    /// there and produced no output.
    Callback { index: usize, error: E },
}

impl<E> TransformError<E> {
    /// Index of the element that caused the failure, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            TransformError::Sequence(err) => err.index(),
            TransformError::Callback { index, .. } => Some(*index),
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::Sequence(err) => err.code(),
            TransformError::Callback { .. } => "seqxform::callback_failed",
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, TransformError::Callback { .. })
    }

    /// Returns the callback's error exactly as the callback produced it.
    pub fn into_callback_error(self) -> Option<E> {
        match self {
            TransformError::Callback { error, .. } => Some(error),
            TransformError::Sequence(_) => None,
        }
    }

    /// Returns the input-level error, if this is one.
    pub fn as_sequence_error(&self) -> Option<&SequenceError> {
        match self {
            TransformError::Sequence(err) => Some(err),
            TransformError::Callback { .. } => None,
        }
    }

    /// Maps the callback error, keeping the failing index.
    pub fn map_callback<F, E2>(self, f: F) -> TransformError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            TransformError::Sequence(err) => TransformError::Sequence(err),
            TransformError::Callback { index, error } => TransformError::Callback {
                index,
                error: f(error),
            },
        }
    }
}

impl<E> From<SequenceError> for TransformError<E> {
    fn from(err: SequenceError) -> Self {
        TransformError::Sequence(err)
    }
}

impl From<TransformError<Infallible>> for SequenceError {
    fn from(err: TransformError<Infallible>) -> Self {
        match err {
            TransformError::Sequence(err) => err,
            TransformError::Callback { error, .. } => match error {},
        }
    }
}

impl<E: fmt::Display> fmt::Display for TransformError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::Sequence(err) => write!(f, "{}", err),
            TransformError::Callback { index, error } => {
                write!(f, "callback failed at index {}: {}", index, error)
            }
        }
    }
}

impl<E> StdError for TransformError<E>
where
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            TransformError::Sequence(err) => Some(err),
            TransformError::Callback { error, .. } => Some(error),
        }
    }
}
