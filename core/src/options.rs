//! Transform configuration.

use crate::error::SequenceError;

/// Options applied by a [`SequenceTransformer`](crate::SequenceTransformer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Largest accepted input length. `None` means unlimited.
    pub max_len: Option<usize>,
    /// Reserve the output buffer up front: the exact length for map, the
    /// worst case (every element kept) for filter. The reservation is capped,
    /// so a view that overstates its length cannot exhaust memory.
    pub capacity_hint: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions::default()
    }
}

impl TransformOptions {
    pub const fn default() -> Self {
        Self {
            max_len: None,
            capacity_hint: true,
        }
    }

    /// Applies an override on top of these options.
    pub fn override_with(&self, other: &TransformOptionsOverride) -> Self {
        Self {
            max_len: other.max_len.unwrap_or(self.max_len),
            capacity_hint: other.capacity_hint.unwrap_or(self.capacity_hint),
        }
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<(), SequenceError> {
        match self.max_len {
            Some(limit) if len > limit => {
                tracing::debug!(len, limit, "Sequence exceeds length limit");
                Err(SequenceError::ResourceExceeded { len, limit })
            }
            _ => Ok(()),
        }
    }
}

/// Partial [`TransformOptions`]; every `Some` field replaces the base value.
///
/// `max_len: Some(None)` lifts a limit set on the base options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptionsOverride {
    pub max_len: Option<Option<usize>>,
    pub capacity_hint: Option<bool>,
}
