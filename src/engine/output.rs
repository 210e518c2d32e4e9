//! Output types for fold operations.
//!
//! ## Purpose
//!
//! This module defines [`FoldOutput`], the structured result every fold
//! run returns: the buffer of folded profiles plus the run metadata a
//! consumer needs to interpret it (stages performed, padding applied).
//!
//! ## Design notes
//!
//! * Row `i` of the profiles corresponds to one dyadic trial-period
//!   refinement; mapping a row back to a physical period and scoring
//!   detections are consumer responsibilities, not provided here.
//! * The output owns its buffer; the executor's scratch buffer is
//!   discarded, never exposed.
//!
//! ## Visibility
//!
//! `FoldOutput` is part of the public API and is re-exported from `api`.

use crate::primitives::buffer::FoldBuffer;

/// Result of a fold run: one folded profile per row, plus run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutput<T> {
    /// Folded profiles, same shape as the initial buffer.
    pub profiles: FoldBuffer<T>,

    /// Number of shift-add stages performed (`log2(nRow)` for a full run).
    pub stages: usize,

    /// Number of padding samples the wrapping step synthesized
    /// (0 when the caller supplied a pre-reshaped buffer).
    pub padded_samples: usize,
}

impl<T> FoldOutput<T> {
    /// Shape of the profiles as `(nRow, nCol)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.profiles.shape()
    }

    /// Borrow the folded profile at row `i`.
    #[inline]
    pub fn profile(&self, i: usize) -> &[T] {
        self.profiles.row(i)
    }

    /// Consume the output, returning the profile buffer.
    pub fn into_profiles(self) -> FoldBuffer<T> {
        self.profiles
    }
}
