//! Two-dimensional fold buffer.
//!
//! ## Purpose
//!
//! This module provides [`FoldBuffer`], the storage type every FFA pass
//! reads from and writes to. A buffer holds `nRow` folded profiles of
//! `nCol` phase bins each, stored as a single row-major flat allocation
//! with an explicit shape descriptor, so row access is bounds-checked
//! rather than assumed.
//!
//! ## Design notes
//!
//! * **Flat storage**: one `Vec<T>` of `nRow * nCol` elements; no
//!   per-row allocations, no pointer arithmetic.
//! * **Explicit shape**: the `(nRow, nCol)` descriptor travels with the
//!   data, so shape errors surface at construction, not mid-recursion.
//! * **Strict construction**: `from_flat` and `from_series` reject any
//!   length that does not tile the requested shape exactly; padding
//!   reshapes live in `primitives::wrap`.
//! * **No aliasing**: buffers never reference each other; the executor
//!   owns both double-buffer instances outright.
//!
//! ## Invariants
//!
//! * `data.len() == n_row * n_col` at all times.
//! * `n_row >= 1` and `n_col >= 1` for any constructed buffer.
//! * Row slices returned by `row`/`row_mut` never overlap.
//!
//! ## Visibility
//!
//! `FoldBuffer` is part of the public API: callers seed the pipeline with
//! one and receive the folded profiles as another.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitives::errors::FfaError;
use num_traits::Float;

/// Row-major buffer of folded profiles: `nRow` rows of `nCol` phase bins.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldBuffer<T> {
    /// Flat row-major storage, `n_row * n_col` elements.
    data: Vec<T>,

    /// Number of rows (folded profiles).
    n_row: usize,

    /// Number of columns (phase bins per profile).
    n_col: usize,
}

impl<T: Float> FoldBuffer<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a buffer from flat row-major storage with a strict shape check.
    pub fn from_flat(data: Vec<T>, n_row: usize, n_col: usize) -> Result<Self, FfaError> {
        if n_row == 0 || n_col == 0 || data.is_empty() {
            return Err(FfaError::EmptyInput);
        }
        if data.len() != n_row * n_col {
            return Err(FfaError::ShapeMismatch {
                len: data.len(),
                n_row,
                n_col,
            });
        }
        Ok(Self { data, n_row, n_col })
    }

    /// Reshape a series at base period `n_col` without padding.
    ///
    /// The series length must be an exact multiple of `n_col`; use
    /// [`wrap_series`](crate::primitives::wrap::wrap_series) when it is not.
    pub fn from_series(series: &[T], n_col: usize) -> Result<Self, FfaError> {
        if series.is_empty() || n_col == 0 {
            return Err(FfaError::EmptyInput);
        }
        if series.len() % n_col != 0 {
            return Err(FfaError::ShapeMismatch {
                len: series.len(),
                n_row: series.len() / n_col,
                n_col,
            });
        }
        let n_row = series.len() / n_col;
        Ok(Self {
            data: series.to_vec(),
            n_row,
            n_col,
        })
    }

    /// Allocate a zero-filled scratch buffer of the given shape.
    ///
    /// Rejects zero dimensions like the other constructors, so every
    /// `FoldBuffer` that exists satisfies the shape invariant.
    pub fn zeros(n_row: usize, n_col: usize) -> Result<Self, FfaError> {
        if n_row == 0 || n_col == 0 {
            return Err(FfaError::EmptyInput);
        }
        Ok(Self {
            data: vec![T::zero(); n_row * n_col],
            n_row,
            n_col,
        })
    }
}

impl<T> FoldBuffer<T> {
    // ========================================================================
    // Shape Accessors
    // ========================================================================

    /// Number of rows (folded profiles).
    #[inline]
    pub fn n_row(&self) -> usize {
        self.n_row
    }

    /// Number of phase bins per profile.
    #[inline]
    pub fn n_col(&self) -> usize {
        self.n_col
    }

    /// Shape as a `(nRow, nCol)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_row, self.n_col)
    }

    /// Whether the row count is a power of two (a full fold is possible).
    #[inline]
    pub fn is_dyadic(&self) -> bool {
        self.n_row.is_power_of_two()
    }

    /// Stage count of a full fold: `log2(nRow)`.
    ///
    /// Meaningful only when [`is_dyadic`](Self::is_dyadic) holds; the
    /// validator enforces that before the executor ever uses this value.
    #[inline]
    pub fn full_stage_count(&self) -> usize {
        self.n_row.trailing_zeros() as usize
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Borrow one row (one folded profile).
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n_col..(i + 1) * self.n_col]
    }

    /// Mutably borrow one row.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.n_col..(i + 1) * self.n_col]
    }

    /// Flat row-major view of the whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat row-major view of the whole buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer, returning the flat storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ============================================================================
// Tests
// ============================================================================
