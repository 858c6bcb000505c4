//! seqxform - `map` and `filter` over any indexable sequence
//!
//! # Overview
//!
//! seqxform provides the two classic array transforms as free functions over
//! an explicit sequence argument. Nothing is patched onto host collection
//! types; any collection implementing [`SequenceView`] can be transformed.
//!
//! - `map` calls the callback with `(element, index)` in ascending index order
//!   and returns a new `Vec` of the same length.
//! - `filter` keeps the elements whose predicate result is [`Truthy`], in their
//!   original order.
//!
//! # Quick Start
//!
//! ```
//! use seqxform::{filter, map};
//!
//! let items = [4, 5, 6];
//! assert_eq!(map(&items, |x, _| x * 4).unwrap(), vec![16, 20, 24]);
//! assert_eq!(filter(&items, |x, _| *x > 4).unwrap(), vec![5, 6]);
//! ```
//!
//! # Failing Callbacks
//!
//! The `try_` variants take callbacks returning `Result`. The first failure
//! aborts the transform and is returned as [`TransformError::Callback`] with the
//! callback's error untouched; no partial output is ever returned.
//!
//! ```
//! use seqxform::{TransformError, try_map};
//!
//! let input = ["1", "2", "x"];
//! let err = try_map(&input, |s, _| s.parse::<i32>()).unwrap_err();
//! assert_eq!(err.index(), Some(2));
//! assert!(matches!(err, TransformError::Callback { .. }));
//! ```
//!
//! # Configuration
//!
//! A [`SequenceTransformer`] applies [`TransformOptions`] such as a maximum
//! input length:
//!
//! ```
//! use seqxform::{SequenceError, SequenceTransformer, TransformOptions};
//!
//! let transformer = SequenceTransformer::new(TransformOptions {
//!     max_len: Some(1_000),
//!     ..TransformOptions::default()
//! });
//! let big = vec![0u8; 1_001];
//! assert!(matches!(
//!     transformer.filter(&big, |x, _| *x),
//!     Err(SequenceError::ResourceExceeded { .. })
//! ));
//! ```
//!
//! # Parallel Transforms
//!
//! With the `parallel` feature (enabled by default), `par_map`, `par_filter` and
//! their `try_` forms run on the rayon thread pool and return results in index
//! order.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, Reportable, render_error, render_error_to};

// Re-export public API from seqxform_core
pub use seqxform_core::{
    SequenceError, SequenceTransformer, SequenceView, TransformError, TransformOptions,
    TransformOptionsOverride, Truthy, filter, filter_with_source, map, map_with_source,
    require_sequence, try_filter, try_filter_with_source, try_map, try_map_with_source,
};

#[cfg(feature = "parallel")]
pub use seqxform_core::{par_filter, par_map, par_try_filter, par_try_map};
