//! Series extension and wrapping.
//!
//! ## Purpose
//!
//! This module reshapes a one-dimensional sample series into the initial
//! [`FoldBuffer`] the fold pipeline consumes: one row per coarse fold at
//! the base period, one column per phase bin. A series rarely divides
//! evenly into whole periods, so the trailing partial row is padded out
//! with a caller-chosen fill value, and the row count can optionally be
//! padded to the next power of two so a full dyadic fold is possible.
//!
//! ## Design notes
//!
//! * **Ceiling division**: a series of N samples wraps into
//!   `ceil(N / P0)` rows; an exactly divisible series gains no spurious
//!   padding row.
//! * **Fill value**: padded bins receive `fill_value` (typically zero so
//!   padding contributes nothing to the folded sums).
//! * **Pow2 padding**: whole rows of `fill_value` are appended until the
//!   row count is a power of two; without it, a non-dyadic row count is
//!   rejected later by the validator.
//!
//! ## Invariants
//!
//! * Every input sample lands in the output exactly once, in row-major
//!   order; only padding is synthesized.
//! * The output shape is `(nRow, P0)` with `nRow * P0 >= N`.
//!
//! ## Non-goals
//!
//! * This module does not validate sample finiteness (handled by the
//!   `validator`).
//! * This module does not choose the base period (caller's responsibility).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::FfaError;
use num_traits::Float;

/// Extend and wrap a series at base period `p0`.
///
/// Pads the hanging part of the last row with `fill_value`; when
/// `pad_pow2` is set, also pads the row count up to the next power of two.
pub fn wrap_series<T: Float>(
    series: &[T],
    p0: usize,
    fill_value: T,
    pad_pow2: bool,
) -> Result<FoldBuffer<T>, FfaError> {
    if series.is_empty() || p0 == 0 {
        return Err(FfaError::EmptyInput);
    }

    let n_row = series.len().div_ceil(p0);
    let n_row = if pad_pow2 {
        n_row.next_power_of_two()
    } else {
        n_row
    };

    let mut data = Vec::with_capacity(n_row * p0);
    data.extend_from_slice(series);
    data.resize(n_row * p0, fill_value);

    FoldBuffer::from_flat(data, n_row, p0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_adds_no_padding() {
        let series: Vec<f64> = (0..8).map(|v| v as f64).collect();
        let buf = wrap_series(&series, 4, 0.0, false).unwrap();
        assert_eq!(buf.shape(), (2, 4));
        assert_eq!(buf.as_slice(), series.as_slice());
    }

    #[test]
    fn partial_row_is_padded_with_fill_value() {
        let series = [1.0f64, 2.0, 3.0, 4.0, 5.0];
        let buf = wrap_series(&series, 3, -1.0, false).unwrap();
        assert_eq!(buf.shape(), (2, 3));
        assert_eq!(buf.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(buf.row(1), &[4.0, 5.0, -1.0]);
    }

    #[test]
    fn pow2_padding_rounds_row_count_up() {
        // 13 samples at period 3 -> 5 rows -> padded to 8.
        let series = [1.0f32; 13];
        let buf = wrap_series(&series, 3, 0.0, true).unwrap();
        assert_eq!(buf.shape(), (8, 3));
        assert!(buf.is_dyadic());
        assert_eq!(buf.row(4), &[1.0, 0.0, 0.0]);
        assert_eq!(buf.row(5), &[0.0, 0.0, 0.0]);
        assert_eq!(buf.row(7), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn pow2_padding_keeps_dyadic_count_unchanged() {
        let series = [2.0f64; 12];
        let buf = wrap_series(&series, 3, 0.0, true).unwrap();
        assert_eq!(buf.shape(), (4, 3));
    }

    #[test]
    fn period_longer_than_series_yields_one_row() {
        let series = [7.0f64, 8.0];
        let buf = wrap_series(&series, 5, 0.0, true).unwrap();
        assert_eq!(buf.shape(), (1, 5));
        assert_eq!(buf.row(0), &[7.0, 8.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            wrap_series::<f64>(&[], 4, 0.0, false).unwrap_err(),
            FfaError::EmptyInput
        );
        assert_eq!(
            wrap_series(&[1.0f64], 0, 0.0, false).unwrap_err(),
            FfaError::EmptyInput
        );
    }
}
