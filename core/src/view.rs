//! Read-only, index-addressable views over host collections.
//!
//! The transforms in this crate never depend on a concrete collection type.
//! Anything that can report a length and hand out a reference to the element
//! at a given index can be mapped or filtered.

use std::collections::VecDeque;

use crate::error::SequenceError;

/// An ordered, finite, zero-indexed sequence.
///
/// Implementations must answer `get(i)` with `Some` for every `i < len()`.
/// A view that violates this (a hole, or a length that shrinks while a
/// transform is running) is rejected by the transforms with
/// [`SequenceError::InvalidInput`].
pub trait SequenceView {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SequenceView for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> SequenceView for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceView for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceView for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> SequenceView for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<S> SequenceView for &S
where
    S: SequenceView + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

/// Turns an optional sequence into a required one.
///
/// A missing sequence is an error, never an empty result.
///
/// # Examples
///
/// ```
/// use seqxform_core::{SequenceError, require_sequence};
///
/// let items = vec![1, 2, 3];
/// assert!(require_sequence(Some(&items)).is_ok());
///
/// let missing: Option<&Vec<i32>> = None;
/// assert!(matches!(
///     require_sequence(missing),
///     Err(SequenceError::InvalidInput { .. })
/// ));
/// ```
pub fn require_sequence<S>(sequence: Option<&S>) -> Result<&S, SequenceError>
where
    S: SequenceView + ?Sized,
{
    sequence.ok_or(SequenceError::InvalidInput {
        reason: "no sequence was provided".into(),
        index: None,
    })
}

/// Fetches `sequence[index]`, treating a missing slot below `len` as invalid input.
#[inline]
pub(crate) fn element_at<S>(sequence: &S, index: usize, len: usize) -> Result<&S::Item, SequenceError>
where
    S: SequenceView + ?Sized,
{
    sequence.get(index).ok_or_else(|| {
        tracing::debug!(index, len, "Sequence has no element at an index below its length");
        SequenceError::InvalidInput {
            reason: format!("no element at index {index} of a sequence of length {len}"),
            index: Some(index),
        }
    })
}
