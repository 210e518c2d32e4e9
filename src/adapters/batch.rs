//! Batch adapter for folding complete series.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it takes a complete
//! in-memory sample series, validates it, wraps it at the caller's base
//! period (padding as configured), runs the fold pipeline, and packages
//! a [`FoldOutput`]. It is the simplest and most direct way to run the
//! FFA on a series.
//!
//! ## Key concepts
//!
//! ### Batch Processing
//! The batch adapter:
//! 1. Validates the series and configuration
//! 2. Wraps the series into the initial fold buffer
//! 3. Executes the recursion via the engine
//! 4. Packages profiles and padding metadata into a `FoldOutput`
//!
//! ### Builder Pattern
//! Configuration is done through `BatchFfaBuilder`:
//! * Fluent API for setting parameters
//! * Sensible defaults for all parameters
//! * Validation deferred until `build()` is called
//!
//! ## Invariants
//!
//! * All samples and the fill value must be finite.
//! * The base period must be non-zero.
//! * With `pad_pow2` disabled, the wrapped row count must already be a
//!   power of two or the fold is rejected.
//!
//! ## Non-goals
//!
//! * This adapter does not parse files or handle CLI arguments.
//! * This adapter does not convert winning rows back to physical periods.
//!
//! ## Visibility
//!
//! The batch adapter is the public entry point, re-exported through
//! `api` as [`Ffa`](crate::api::Ffa).

use crate::engine::executor::{FfaExecutor, StagePassFn};
use crate::engine::output::FoldOutput;
use crate::engine::validator::Validator;
use crate::input::SeriesInput;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::FfaError;
use crate::primitives::wrap::wrap_series;

use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// Batch FFA Builder
// ============================================================================

/// Builder for the batch FFA processor.
#[derive(Debug, Clone)]
pub struct BatchFfaBuilder<T: Float> {
    /// Value used to pad the wrapped buffer (default: zero).
    pub fill_value: Option<T>,

    /// Pad the row count to the next power of two (default: true).
    pub pad_pow2: Option<bool>,

    /// Use the group-parallel stage pass (default: true with the
    /// `parallel` feature, ignored without it).
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchFfaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchFfaBuilder<T> {
    /// Create a new batch builder with default parameters.
    pub fn new() -> Self {
        Self {
            fill_value: None,
            pad_pow2: None,
            parallel: cfg!(feature = "parallel"),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the fill value used for padding.
    pub fn fill_value(mut self, fill: T) -> Self {
        if self.fill_value.is_some() {
            self.duplicate_param = Some("fill_value");
        }
        self.fill_value = Some(fill);
        self
    }

    /// Enable or disable padding the row count to the next power of two.
    pub fn pad_pow2(mut self, enabled: bool) -> Self {
        if self.pad_pow2.is_some() {
            self.duplicate_param = Some("pad_pow2");
        }
        self.pad_pow2 = Some(enabled);
        self
    }

    /// Enable or disable the group-parallel stage pass.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor, validating the configuration.
    pub fn build(self) -> Result<BatchFfa<T>, FfaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fill_value = self.fill_value.unwrap_or_else(T::zero);
        Validator::validate_fill_value(fill_value)?;

        Ok(BatchFfa {
            fill_value,
            pad_pow2: self.pad_pow2.unwrap_or(true),
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Batch FFA Processor
// ============================================================================

/// Batch FFA processor.
#[derive(Debug, Clone)]
pub struct BatchFfa<T: Float> {
    fill_value: T,
    pad_pow2: bool,
    parallel: bool,
}

impl<T: Float + Debug + Send + Sync> BatchFfa<T> {
    /// Fold a complete series at base period `p0`.
    pub fn fold<I>(&self, series: &I, p0: usize) -> Result<FoldOutput<T>, FfaError>
    where
        I: SeriesInput<T> + ?Sized,
    {
        let samples = series.as_series_slice()?;
        Validator::validate_series(samples)?;
        Validator::validate_period(p0)?;

        let buffer = wrap_series(samples, p0, self.fill_value, self.pad_pow2)?;
        let padded_samples = buffer.n_row() * buffer.n_col() - samples.len();

        let mut output = self.executor().run(buffer)?;
        output.padded_samples = padded_samples;
        Ok(output)
    }

    /// Fold an already-reshaped buffer, bypassing wrapping and padding.
    pub fn fold_buffer(&self, buffer: FoldBuffer<T>) -> Result<FoldOutput<T>, FfaError> {
        self.executor().run(buffer)
    }

    fn executor(&self) -> FfaExecutor<T> {
        FfaExecutor::new().custom_stage_pass(self.stage_pass())
    }

    #[cfg(feature = "parallel")]
    fn stage_pass(&self) -> Option<StagePassFn<T>> {
        if self.parallel {
            Some(crate::engine::parallel::shift_add_stage_parallel)
        } else {
            None
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn stage_pass(&self) -> Option<StagePassFn<T>> {
        // `parallel` is configuration-only without the feature.
        let _ = self.parallel;
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
