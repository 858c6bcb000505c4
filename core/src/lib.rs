//! Generic `map` and `filter` over any ordered, index-addressable sequence.
//!
//! The crate is built around three pieces:
//!
//! - [`SequenceView`]: the read-only contract a collection must satisfy
//!   (length plus indexed access). Implemented for slices, arrays, `Vec`,
//!   `Box<[T]>` and `VecDeque`.
//! - [`SequenceTransformer`]: runs `map`/`filter` under [`TransformOptions`].
//!   Free functions such as [`map`] and [`filter`] use the default options.
//! - [`SequenceError`] and [`TransformError`]: input failures, and callback
//!   failures carrying the caller's own error unchanged.
//!
//! Inputs are never mutated. Every call returns a freshly allocated `Vec`, or an
//! error and nothing else.
//!
//! # Example
//!
//! ```
//! use seqxform_core::{TransformError, filter, map, try_map};
//!
//! let items = vec![4, 5, 6];
//!
//! assert_eq!(map(&items, |x, _| x * 4).unwrap(), vec![16, 20, 24]);
//! assert_eq!(filter(&items, |x, _| *x > 4).unwrap(), vec![5, 6]);
//!
//! let err = try_map(&items, |x, index| {
//!     if index == 1 { Err("too big") } else { Ok(*x) }
//! })
//! .unwrap_err();
//! assert_eq!(err, TransformError::Callback { index: 1, error: "too big" });
//! ```

pub mod error;
pub mod options;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod transform;
pub mod truthy;
pub mod view;

pub use error::{SequenceError, TransformError};
pub use options::{TransformOptions, TransformOptionsOverride};
#[cfg(feature = "parallel")]
pub use parallel::{par_filter, par_map, par_try_filter, par_try_map};
pub use transform::{
    SequenceTransformer, filter, filter_with_source, map, map_with_source, try_filter,
    try_filter_with_source, try_map, try_map_with_source,
};
pub use truthy::Truthy;
pub use view::{SequenceView, require_sequence};
