//! Error types for FFA operations.
//!
//! ## Purpose
//!
//! This module defines the unified error enum returned by every fallible
//! operation in the crate. All variants are input-validation failures:
//! once validation passes, the fold recursion itself is pure arithmetic
//! over fixed-shape buffers and cannot fail mid-pipeline.
//!
//! ## Design notes
//!
//! * Errors carry the offending values so messages need no extra context.
//! * All errors are detected before any stage runs; no partial results
//!   are ever returned alongside an error.
//! * Derived with `thiserror`; works in `no_std` builds via `alloc`.
//!
//! ## Visibility
//!
//! `FfaError` is part of the public API and is re-exported from `api`.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Errors reported by FFA validation and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FfaError {
    /// The input series or buffer has no samples.
    #[error("empty input: the series and the fold buffer must be non-empty")]
    EmptyInput,

    /// Flat storage length disagrees with the `(nRow, nCol)` descriptor,
    /// or a strict reshape was requested on an indivisible length.
    #[error("shape mismatch: {len} elements cannot form a {n_row}x{n_col} buffer")]
    ShapeMismatch {
        /// Flat element count supplied.
        len: usize,
        /// Requested row count.
        n_row: usize,
        /// Requested column (bin) count.
        n_col: usize,
    },

    /// A full fold was requested on a buffer whose row count is not a
    /// power of two, so the stage count is ill-defined.
    #[error("row count {n_row} is not a power of two; pad the series (pad_pow2) or reshape it")]
    NotPowerOfTwo {
        /// Offending row count.
        n_row: usize,
    },

    /// A stage's group would span more rows than the buffer holds. This
    /// indicates a caller-side miscomputation of the stage count and is
    /// never clamped silently.
    #[error("degenerate group: group of {group_size} rows exceeds the {n_row}-row buffer")]
    DegenerateGroup {
        /// Rows per group at the offending stage.
        group_size: usize,
        /// Rows available in the buffer.
        n_row: usize,
    },

    /// A sample or configuration value is NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFiniteValue(String),

    /// A builder parameter was set more than once.
    #[error("parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// The input could not be viewed as a contiguous sample series.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
