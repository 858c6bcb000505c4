//! Data-parallel `map` and `filter` on the rayon thread pool.
//!
//! Results come back in index order, exactly as from the sequential
//! operations. What differs:
//!
//! - callbacks must be `Fn + Sync` and may run concurrently, in any order;
//! - when several callbacks fail, which failure is reported is unspecified;
//! - `capacity_hint` is ignored.
//!
//! A failure still yields no partial output.

use std::convert::Infallible;

use rayon::prelude::*;

use crate::error::{SequenceError, TransformError};
use crate::transform::SequenceTransformer;
use crate::truthy::Truthy;
use crate::view::{SequenceView, element_at};

impl SequenceTransformer {
    /// Parallel [`map`](Self::map).
    pub fn par_map<S, R, F>(&self, sequence: &S, f: F) -> Result<Vec<R>, SequenceError>
    where
        S: SequenceView + Sync + ?Sized,
        S::Item: Sync,
        R: Send,
        F: Fn(&S::Item, usize) -> R + Sync + Send,
    {
        self.par_try_map(sequence, |element, index| {
            Ok::<_, Infallible>(f(element, index))
        })
        .map_err(SequenceError::from)
    }

    /// Parallel [`try_map`](Self::try_map).
    pub fn par_try_map<S, R, E, F>(&self, sequence: &S, f: F) -> Result<Vec<R>, TransformError<E>>
    where
        S: SequenceView + Sync + ?Sized,
        S::Item: Sync,
        R: Send,
        E: Send,
        F: Fn(&S::Item, usize) -> Result<R, E> + Sync + Send,
    {
        let len = sequence.len();
        let _span = tracing::debug_span!("par_map", len).entered();
        self.options().check_len(len)?;

        let result: Result<Vec<R>, TransformError<E>> = (0..len)
            .into_par_iter()
            .map(|index| -> Result<R, TransformError<E>> {
                let element = element_at(sequence, index, len)?;
                f(element, index).map_err(|error| TransformError::Callback { index, error })
            })
            .collect();

        if let Err(err) = &result {
            tracing::debug!(index = ?err.index(), "Parallel map aborted");
        }
        result
    }

    /// Parallel [`filter`](Self::filter). Survivors keep their original order.
    pub fn par_filter<S, P, F>(&self, sequence: &S, predicate: F) -> Result<Vec<S::Item>, SequenceError>
    where
        S: SequenceView + Sync + ?Sized,
        S::Item: Clone + Send + Sync,
        P: Truthy,
        F: Fn(&S::Item, usize) -> P + Sync + Send,
    {
        self.par_try_filter(sequence, |element, index| {
            Ok::<_, Infallible>(predicate(element, index))
        })
        .map_err(SequenceError::from)
    }

    /// Parallel [`try_filter`](Self::try_filter).
    pub fn par_try_filter<S, P, E, F>(
        &self,
        sequence: &S,
        predicate: F,
    ) -> Result<Vec<S::Item>, TransformError<E>>
    where
        S: SequenceView + Sync + ?Sized,
        S::Item: Clone + Send + Sync,
        P: Truthy,
        E: Send,
        F: Fn(&S::Item, usize) -> Result<P, E> + Sync + Send,
    {
        let len = sequence.len();
        let _span = tracing::debug_span!("par_filter", len).entered();
        self.options().check_len(len)?;

        let result: Result<Vec<S::Item>, TransformError<E>> = (0..len)
            .into_par_iter()
            .filter_map(|index| -> Option<Result<S::Item, TransformError<E>>> {
                let element = match element_at(sequence, index, len) {
                    Ok(element) => element,
                    Err(err) => return Some(Err(err.into())),
                };
                match predicate(element, index) {
                    Ok(keep) if keep.is_truthy() => Some(Ok(element.clone())),
                    Ok(_) => None,
                    Err(error) => Some(Err(TransformError::Callback { index, error })),
                }
            })
            .collect();

        if let Err(err) = &result {
            tracing::debug!(index = ?err.index(), "Parallel filter aborted");
        }
        result
    }
}

/// See [`SequenceTransformer::par_map`].
pub fn par_map<S, R, F>(sequence: &S, f: F) -> Result<Vec<R>, SequenceError>
where
    S: SequenceView + Sync + ?Sized,
    S::Item: Sync,
    R: Send,
    F: Fn(&S::Item, usize) -> R + Sync + Send,
{
    SequenceTransformer::default().par_map(sequence, f)
}

/// See [`SequenceTransformer::par_try_map`].
pub fn par_try_map<S, R, E, F>(sequence: &S, f: F) -> Result<Vec<R>, TransformError<E>>
where
    S: SequenceView + Sync + ?Sized,
    S::Item: Sync,
    R: Send,
    E: Send,
    F: Fn(&S::Item, usize) -> Result<R, E> + Sync + Send,
{
    SequenceTransformer::default().par_try_map(sequence, f)
}

/// See [`SequenceTransformer::par_filter`].
pub fn par_filter<S, P, F>(sequence: &S, predicate: F) -> Result<Vec<S::Item>, SequenceError>
where
    S: SequenceView + Sync + ?Sized,
    S::Item: Clone + Send + Sync,
    P: Truthy,
    F: Fn(&S::Item, usize) -> P + Sync + Send,
{
    SequenceTransformer::default().par_filter(sequence, predicate)
}

/// See [`SequenceTransformer::par_try_filter`].
pub fn par_try_filter<S, P, E, F>(
    sequence: &S,
    predicate: F,
) -> Result<Vec<S::Item>, TransformError<E>>
where
    S: SequenceView + Sync + ?Sized,
    S::Item: Clone + Send + Sync,
    P: Truthy,
    E: Send,
    F: Fn(&S::Item, usize) -> Result<P, E> + Sync + Send,
{
    SequenceTransformer::default().par_try_filter(sequence, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TransformOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_par_map_preserves_order() {
        let items: Vec<u64> = (0..10_000).collect();
        let doubled = par_map(&items, |x, index| {
            assert_eq!(*x, index as u64);
            x * 2
        })
        .unwrap();

        let expected: Vec<u64> = (0..10_000).map(|x| x * 2).collect();
        assert_eq!(doubled, expected);
    }

    #[test]
    fn test_par_filter_is_stable() {
        let items: Vec<u32> = (0..5_000).collect();
        let odd = par_filter(&items, |x, _| x % 2 == 1).unwrap();

        assert_eq!(odd.len(), 2_500);
        assert!(odd.windows(2).all(|w| w[0] < w[1]));
        assert!(odd.iter().all(|x| x % 2 == 1));
    }

    #[test]
    fn test_par_matches_sequential() {
        let items = [4, 5, 6];
        assert_eq!(par_map(&items, |x, _| x * 4).unwrap(), vec![16, 20, 24]);
        assert_eq!(par_filter(&items, |x, _| *x > 4).unwrap(), vec![5, 6]);

        let empty: [i32; 0] = [];
        assert_eq!(par_map(&empty, |x, _| *x).unwrap(), Vec::<i32>::new());
        assert_eq!(par_filter(&empty, |_, _| true).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_par_try_map_reports_failure_without_output() {
        let items: Vec<i32> = (0..1_000).collect();
        let err = par_try_map(&items, |x, _| if *x == 500 { Err("bad") } else { Ok(*x) })
            .unwrap_err();
        assert_eq!(err, TransformError::Callback { index: 500, error: "bad" });
    }

    #[test]
    fn test_par_try_filter_reports_one_of_the_failures() {
        let items: Vec<i32> = (0..1_000).collect();
        let err = par_try_filter(&items, |x, _| if x % 100 == 99 { Err(*x) } else { Ok(true) })
            .unwrap_err();
        let index = err.index().unwrap();
        assert_eq!(index % 100, 99);
        assert_eq!(err.into_callback_error(), Some(index as i32));
    }

    #[test]
    fn test_par_respects_max_len() {
        let transformer = SequenceTransformer::new(TransformOptions {
            max_len: Some(2),
            ..TransformOptions::default()
        });
        let err = transformer.par_map(&[1, 2, 3], |x, _| *x).unwrap_err();
        assert_eq!(err, SequenceError::ResourceExceeded { len: 3, limit: 2 });
    }

    struct Holey {
        items: Vec<i32>,
        claimed_len: usize,
    }

    impl SequenceView for Holey {
        type Item = i32;

        fn len(&self) -> usize {
            self.claimed_len
        }

        fn get(&self, index: usize) -> Option<&i32> {
            self.items.get(index)
        }
    }

    #[test]
    fn test_par_hole_is_invalid_input() {
        let holey = Holey {
            items: vec![1, 2, 3],
            claimed_len: 4,
        };

        let err = par_map(&holey, |x, _| *x).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidInput { index: Some(3), .. }));

        let err = par_filter(&holey, |_, _| true).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidInput { index: Some(3), .. }));

        let err = par_try_map(&holey, |x, _| Ok::<_, ()>(*x)).unwrap_err();
        assert_eq!(err.as_sequence_error().and_then(SequenceError::index), Some(3));
    }
}
