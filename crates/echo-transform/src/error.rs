// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by transform construction and Euler-order parsing.
///
/// Only malformed *shapes* of input are rejected. Out-of-range angles,
/// non-unit quaternions and non-orthogonal matrices are accepted and produce
/// whatever the arithmetic yields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The Euler order tag is not one of the supported orders.
    #[error("unsupported euler order: {0}")]
    UnsupportedOrder(String),
    /// A slice passed as matrix elements did not hold exactly 16 values.
    #[error("matrix element count mismatch: expected {expected}, got {actual}")]
    ElementCount {
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
}

/// Convenience alias for results carrying a [`TransformError`].
pub type Result<T> = core::result::Result<T, TransformError>;
