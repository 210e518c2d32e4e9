//! Input validation for fold configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions the executor and the
//! batch adapter run before any computation begins. The fold recursion
//! itself is pure arithmetic over fixed-shape buffers, so every failure
//! mode is an input problem detectable up front; validation here is what
//! guarantees the pipeline never loops incorrectly or returns a silently
//! truncated fold.
//!
//! ## Design notes
//!
//! * All validation is performed upfront before folding begins.
//! * Validation is fail-fast: returns on first error encountered.
//! * Error messages include specific values and context for debugging.
//! * Validation is generic over `Float` types to support f32 and f64.
//! * Checks are ordered from cheap to expensive.
//!
//! ## Validated parameters
//!
//! * **Series**: non-empty, all samples finite
//! * **Base period**: non-zero
//! * **Buffer shape**: non-empty, dyadic row count for a full run
//! * **Stage count**: the final stage's group size divides the row count
//! * **Fill value**: finite
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A buffer that passes `validate_full_run` supports exactly
//!   `log2(nRow)` stages.
//!
//! ## Non-goals
//!
//! * This module does not reshape, pad, or transform data.
//! * This module does not perform the folding itself.
//!
//! ## Visibility
//!
//! Internal implementation detail used by the executor and adapters; not
//! part of the stable API.

#[cfg(not(feature = "std"))]
use alloc::format;

use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::FfaError;
use num_traits::Float;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fold configuration and input data.
///
/// Provides static methods returning `Result<(), FfaError>`; each fails
/// fast on the first violation it identifies.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a raw sample series: non-empty and all finite.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), FfaError> {
        if series.is_empty() {
            return Err(FfaError::EmptyInput);
        }

        for (i, &sample) in series.iter().enumerate() {
            if !sample.is_finite() {
                return Err(FfaError::NonFiniteValue(format!(
                    "series[{}]={}",
                    i,
                    sample.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate the base period (column count) of a reshape.
    pub fn validate_period(p0: usize) -> Result<(), FfaError> {
        if p0 == 0 {
            return Err(FfaError::EmptyInput);
        }
        Ok(())
    }

    /// Validate the padding fill value.
    pub fn validate_fill_value<T: Float>(fill: T) -> Result<(), FfaError> {
        if !fill.is_finite() {
            return Err(FfaError::NonFiniteValue(format!(
                "fill_value={}",
                fill.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Buffer and Stage Validation
    // ========================================================================

    /// Validate a buffer for a full fold: dyadic row count.
    ///
    /// Buffer non-emptiness holds by construction; the dyadic check is
    /// what keeps the stage-count computation well defined.
    pub fn validate_full_run<T>(buffer: &FoldBuffer<T>) -> Result<(), FfaError> {
        if !buffer.is_dyadic() {
            return Err(FfaError::NotPowerOfTwo {
                n_row: buffer.n_row(),
            });
        }
        Ok(())
    }

    /// Validate an explicit stage count against a buffer.
    ///
    /// The final stage's group size must divide the row count exactly, so
    /// that every row belongs to a group and no row passes through a stage
    /// unfolded. On a dyadic buffer any `n_stage <= log2(nRow)` qualifies;
    /// on a non-dyadic buffer only stages whose group size divides `nRow`
    /// describe a valid partial fold.
    pub fn validate_stage_count<T>(
        buffer: &FoldBuffer<T>,
        n_stage: usize,
    ) -> Result<(), FfaError> {
        if n_stage >= usize::BITS as usize || buffer.n_row() % (1usize << n_stage) != 0 {
            return Err(FfaError::DegenerateGroup {
                group_size: 1usize
                    .checked_shl(n_stage as u32)
                    .unwrap_or(usize::MAX),
                n_row: buffer.n_row(),
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FfaError> {
        if let Some(parameter) = duplicate_param {
            return Err(FfaError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_must_be_non_empty() {
        assert_eq!(
            Validator::validate_series::<f64>(&[]).unwrap_err(),
            FfaError::EmptyInput
        );
    }

    #[test]
    fn series_must_be_finite() {
        let err = Validator::validate_series(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, FfaError::NonFiniteValue(_)));

        assert!(Validator::validate_series(&[1.0f32, 2.0]).is_ok());
    }

    #[test]
    fn period_zero_is_rejected() {
        assert_eq!(Validator::validate_period(0).unwrap_err(), FfaError::EmptyInput);
        assert!(Validator::validate_period(5).is_ok());
    }

    #[test]
    fn fill_value_must_be_finite() {
        assert!(Validator::validate_fill_value(0.0f64).is_ok());
        assert!(matches!(
            Validator::validate_fill_value(f64::INFINITY),
            Err(FfaError::NonFiniteValue(_))
        ));
    }

    #[test]
    fn full_run_requires_dyadic_rows() {
        let ok = FoldBuffer::<f64>::zeros(8, 3).unwrap();
        assert!(Validator::validate_full_run(&ok).is_ok());

        let bad = FoldBuffer::<f64>::zeros(6, 3).unwrap();
        assert_eq!(
            Validator::validate_full_run(&bad).unwrap_err(),
            FfaError::NotPowerOfTwo { n_row: 6 }
        );
    }

    #[test]
    fn stage_count_caps_at_log2() {
        let buf = FoldBuffer::<f64>::zeros(8, 2).unwrap();
        assert!(Validator::validate_stage_count(&buf, 0).is_ok());
        assert!(Validator::validate_stage_count(&buf, 3).is_ok());
        assert_eq!(
            Validator::validate_stage_count(&buf, 4).unwrap_err(),
            FfaError::DegenerateGroup {
                group_size: 16,
                n_row: 8
            }
        );
    }

    #[test]
    fn stage_group_must_divide_rows() {
        let buf = FoldBuffer::<f64>::zeros(6, 2).unwrap();

        // 3 groups of 2 rows each: valid partial fold.
        assert!(Validator::validate_stage_count(&buf, 1).is_ok());

        // Groups of 4 rows do not tile 6 rows.
        assert_eq!(
            Validator::validate_stage_count(&buf, 2).unwrap_err(),
            FfaError::DegenerateGroup {
                group_size: 4,
                n_row: 6
            }
        );
    }

    #[test]
    fn duplicate_parameters_are_rejected() {
        assert!(Validator::validate_no_duplicates(None).is_ok());
        assert_eq!(
            Validator::validate_no_duplicates(Some("fill_value")).unwrap_err(),
            FfaError::DuplicateParameter {
                parameter: "fill_value"
            }
        );
    }
}
