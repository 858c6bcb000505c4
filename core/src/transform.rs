//! Sequential `map` and `filter`.
//!
//! Every operation walks the input once, in ascending index order, invoking the
//! callback exactly once per element until it finishes or the callback fails.
//! A failure aborts the walk and discards whatever was produced so far; callers
//! never observe a partial result.
//!
//! Operations come in four flavours:
//!
//! | | `(element, index)` | `(element, index, source)` |
//! |-|--------------------|----------------------------|
//! | infallible callback | [`map`], [`filter`] | [`map_with_source`], [`filter_with_source`] |
//! | fallible callback | [`try_map`], [`try_filter`] | [`try_map_with_source`], [`try_filter_with_source`] |
//!
//! The free functions run with [`TransformOptions::default()`]. Use a
//! [`SequenceTransformer`] to apply other options.
//!
//! # Examples
//!
//! ```
//! use seqxform_core::{filter, map};
//!
//! let items = [4, 5, 6];
//! assert_eq!(map(&items, |x, _| x * 4).unwrap(), vec![16, 20, 24]);
//! assert_eq!(filter(&items, |x, _| *x > 4).unwrap(), vec![5, 6]);
//! ```

use std::convert::Infallible;

use crate::error::{SequenceError, TransformError};
use crate::options::{TransformOptions, TransformOptionsOverride};
use crate::truthy::Truthy;
use crate::view::{SequenceView, element_at};

/// Upper bound on the up-front output reservation. A view's `len` is only a
/// claim until every element has been read.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Runs `map` and `filter` under a fixed set of [`TransformOptions`].
///
/// The transformer holds no state besides its options, so one value can be
/// shared freely and reused across calls.
///
/// # Example
///
/// ```
/// use seqxform_core::{SequenceError, SequenceTransformer, TransformOptions};
///
/// let transformer = SequenceTransformer::new(TransformOptions {
///     max_len: Some(2),
///     ..TransformOptions::default()
/// });
///
/// assert_eq!(transformer.map(&[1, 2], |x, _| x + 1).unwrap(), vec![2, 3]);
/// assert!(matches!(
///     transformer.map(&[1, 2, 3], |x, _| x + 1),
///     Err(SequenceError::ResourceExceeded { len: 3, limit: 2 })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceTransformer {
    options: TransformOptions,
}

impl SequenceTransformer {
    pub const fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Returns a transformer with `overrides` applied on top of these options.
    pub fn with_override(&self, overrides: &TransformOptionsOverride) -> Self {
        Self::new(self.options.override_with(overrides))
    }

    fn output_buffer<T>(&self, len: usize) -> Vec<T> {
        if self.options.capacity_hint {
            Vec::with_capacity(len.min(PREALLOC_LIMIT))
        } else {
            Vec::new()
        }
    }

    // ------------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------------

    /// Produces `[f(s[0], 0), f(s[1], 1), ...]`.
    pub fn map<S, R, F>(&self, sequence: &S, mut f: F) -> Result<Vec<R>, SequenceError>
    where
        S: SequenceView + ?Sized,
        F: FnMut(&S::Item, usize) -> R,
    {
        self.try_map_with_source(sequence, |element, index, _| {
            Ok::<_, Infallible>(f(element, index))
        })
        .map_err(SequenceError::from)
    }

    /// Like [`map`](Self::map), but the callback may fail.
    pub fn try_map<S, R, E, F>(&self, sequence: &S, mut f: F) -> Result<Vec<R>, TransformError<E>>
    where
        S: SequenceView + ?Sized,
        F: FnMut(&S::Item, usize) -> Result<R, E>,
    {
        self.try_map_with_source(sequence, |element, index, _| f(element, index))
    }

    /// Like [`map`](Self::map), also passing the whole source to the callback.
    pub fn map_with_source<S, R, F>(&self, sequence: &S, mut f: F) -> Result<Vec<R>, SequenceError>
    where
        S: SequenceView + ?Sized,
        F: FnMut(&S::Item, usize, &S) -> R,
    {
        self.try_map_with_source(sequence, |element, index, source| {
            Ok::<_, Infallible>(f(element, index, source))
        })
        .map_err(SequenceError::from)
    }

    /// The general form every other map delegates to.
    pub fn try_map_with_source<S, R, E, F>(
        &self,
        sequence: &S,
        mut f: F,
    ) -> Result<Vec<R>, TransformError<E>>
    where
        S: SequenceView + ?Sized,
        F: FnMut(&S::Item, usize, &S) -> Result<R, E>,
    {
        let len = sequence.len();
        let _span = tracing::debug_span!("map", len).entered();
        self.options.check_len(len)?;

        let mut results = self.output_buffer(len);
        for index in 0..len {
            let element = element_at(sequence, index, len)?;
            match f(element, index, sequence) {
                Ok(value) => results.push(value),
                Err(error) => {
                    tracing::debug!(index, "Callback failed, aborting map");
                    return Err(TransformError::Callback { index, error });
                }
            }
        }

        debug_assert_eq!(results.len(), len);
        Ok(results)
    }

    // ------------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------------

    /// Keeps the elements whose predicate result is truthy, in their original order.
    pub fn filter<S, P, F>(&self, sequence: &S, mut predicate: F) -> Result<Vec<S::Item>, SequenceError>
    where
        S: SequenceView + ?Sized,
        S::Item: Clone,
        P: Truthy,
        F: FnMut(&S::Item, usize) -> P,
    {
        self.try_filter_with_source(sequence, |element, index, _| {
            Ok::<_, Infallible>(predicate(element, index))
        })
        .map_err(SequenceError::from)
    }

    /// Like [`filter`](Self::filter), but the predicate may fail.
    pub fn try_filter<S, P, E, F>(
        &self,
        sequence: &S,
        mut predicate: F,
    ) -> Result<Vec<S::Item>, TransformError<E>>
    where
        S: SequenceView + ?Sized,
        S::Item: Clone,
        P: Truthy,
        F: FnMut(&S::Item, usize) -> Result<P, E>,
    {
        self.try_filter_with_source(sequence, |element, index, _| predicate(element, index))
    }

    /// Like [`filter`](Self::filter), also passing the whole source to the predicate.
    pub fn filter_with_source<S, P, F>(
        &self,
        sequence: &S,
        mut predicate: F,
    ) -> Result<Vec<S::Item>, SequenceError>
    where
        S: SequenceView + ?Sized,
        S::Item: Clone,
        P: Truthy,
        F: FnMut(&S::Item, usize, &S) -> P,
    {
        self.try_filter_with_source(sequence, |element, index, source| {
            Ok::<_, Infallible>(predicate(element, index, source))
        })
        .map_err(SequenceError::from)
    }

    /// The general form every other filter delegates to.
    pub fn try_filter_with_source<S, P, E, F>(
        &self,
        sequence: &S,
        mut predicate: F,
    ) -> Result<Vec<S::Item>, TransformError<E>>
    where
        S: SequenceView + ?Sized,
        S::Item: Clone,
        P: Truthy,
        F: FnMut(&S::Item, usize, &S) -> Result<P, E>,
    {
        let len = sequence.len();
        let _span = tracing::debug_span!("filter", len).entered();
        self.options.check_len(len)?;

        let mut kept = self.output_buffer(len);
        for index in 0..len {
            let element = element_at(sequence, index, len)?;
            match predicate(element, index, sequence) {
                Ok(keep) => {
                    if keep.is_truthy() {
                        kept.push(element.clone());
                    }
                }
                Err(error) => {
                    tracing::debug!(index, "Predicate failed, aborting filter");
                    return Err(TransformError::Callback { index, error });
                }
            }
        }

        tracing::trace!(kept = kept.len(), "Filter finished");
        Ok(kept)
    }
}

// ============================================================================
// Free functions
// ============================================================================

const DEFAULT: SequenceTransformer = SequenceTransformer::new(TransformOptions::default());

/// See [`SequenceTransformer::map`].
pub fn map<S, R, F>(sequence: &S, f: F) -> Result<Vec<R>, SequenceError>
where
    S: SequenceView + ?Sized,
    F: FnMut(&S::Item, usize) -> R,
{
    DEFAULT.map(sequence, f)
}

/// See [`SequenceTransformer::try_map`].
pub fn try_map<S, R, E, F>(sequence: &S, f: F) -> Result<Vec<R>, TransformError<E>>
where
    S: SequenceView + ?Sized,
    F: FnMut(&S::Item, usize) -> Result<R, E>,
{
    DEFAULT.try_map(sequence, f)
}

/// See [`SequenceTransformer::map_with_source`].
pub fn map_with_source<S, R, F>(sequence: &S, f: F) -> Result<Vec<R>, SequenceError>
where
    S: SequenceView + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> R,
{
    DEFAULT.map_with_source(sequence, f)
}

/// See [`SequenceTransformer::try_map_with_source`].
pub fn try_map_with_source<S, R, E, F>(sequence: &S, f: F) -> Result<Vec<R>, TransformError<E>>
where
    S: SequenceView + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> Result<R, E>,
{
    DEFAULT.try_map_with_source(sequence, f)
}

/// See [`SequenceTransformer::filter`].
pub fn filter<S, P, F>(sequence: &S, predicate: F) -> Result<Vec<S::Item>, SequenceError>
where
    S: SequenceView + ?Sized,
    S::Item: Clone,
    P: Truthy,
    F: FnMut(&S::Item, usize) -> P,
{
    DEFAULT.filter(sequence, predicate)
}

/// See [`SequenceTransformer::try_filter`].
pub fn try_filter<S, P, E, F>(sequence: &S, predicate: F) -> Result<Vec<S::Item>, TransformError<E>>
where
    S: SequenceView + ?Sized,
    S::Item: Clone,
    P: Truthy,
    F: FnMut(&S::Item, usize) -> Result<P, E>,
{
    DEFAULT.try_filter(sequence, predicate)
}

/// See [`SequenceTransformer::filter_with_source`].
pub fn filter_with_source<S, P, F>(sequence: &S, predicate: F) -> Result<Vec<S::Item>, SequenceError>
where
    S: SequenceView + ?Sized,
    S::Item: Clone,
    P: Truthy,
    F: FnMut(&S::Item, usize, &S) -> P,
{
    DEFAULT.filter_with_source(sequence, predicate)
}

/// See [`SequenceTransformer::try_filter_with_source`].
pub fn try_filter_with_source<S, P, E, F>(
    sequence: &S,
    predicate: F,
) -> Result<Vec<S::Item>, TransformError<E>>
where
    S: SequenceView + ?Sized,
    S::Item: Clone,
    P: Truthy,
    F: FnMut(&S::Item, usize, &S) -> Result<P, E>,
{
    DEFAULT.try_filter_with_source(sequence, predicate)
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
