//! Execution engine for the fold recursion.
//!
//! ## Purpose
//!
//! This module orchestrates the full FFA: it owns the two fold buffers,
//! alternates their source/destination roles across stages, drives one
//! shift-add pass per doubling, and hands back the buffer that holds the
//! final folded profiles. It is the only component that sequences stages;
//! everything inside a stage lives in the algorithm layer.
//!
//! ## Design notes
//!
//! * **Strict double buffering**: within one stage, reads come from one
//!   buffer and writes go to the other, so no group can observe a value
//!   overwritten earlier in the same pass.
//! * **Parity rotation**: buffer roles are an explicit two-element
//!   rotation on stage parity (odd stages read A and write B, even
//!   stages read B and write A), which makes the terminal-buffer
//!   selection enumerable and testable.
//! * **Stage pass hook**: a `StagePassFn` function hook lets callers
//!   substitute the group-parallel pass (see `engine::parallel`) without
//!   the executor knowing about thread pools.
//! * **Validate once**: every failure mode is rejected before stage 1;
//!   the loop body itself cannot fail.
//!
//! ## Key concepts
//!
//! ### Execution Flow
//!
//! 1. Validate the initial buffer (and stage count, if explicit).
//! 2. Seed buffer A from the initial reshape; allocate scratch buffer B.
//! 3. For `stage` in `1..=nStage`: plan the butterfly, pick roles by
//!    parity, run one stage pass.
//! 4. Return the destination of the final stage inside a
//!    [`FoldOutput`]; discard the other buffer.
//!
//! ## Invariants
//!
//! * Stages are strictly sequential; stage s+1 consumes the complete
//!   output of stage s.
//! * Both buffers keep the initial `(nRow, nCol)` shape for the whole
//!   run.
//! * A zero-stage run returns the input unchanged.
//!
//! ## Non-goals
//!
//! * This module does not reshape series (handled by `wrap` / adapters).
//! * This module does not map rows to physical periods (consumer's
//!   responsibility).

use crate::algorithms::butterfly::Butterfly;
use crate::algorithms::shift_add::shift_add_stage;
use crate::engine::output::FoldOutput;
use crate::engine::validator::Validator;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::FfaError;
use num_traits::Float;

// ============================================================================
// Stage Pass Hook
// ============================================================================

/// Signature of one stage pass over a whole buffer.
///
/// The default is [`shift_add_stage`]; the `parallel` feature provides a
/// group-parallel drop-in with identical results.
pub type StagePassFn<T> = fn(&FoldBuffer<T>, &mut FoldBuffer<T>, &Butterfly);

// ============================================================================
// FfaExecutor
// ============================================================================

/// Double-buffered executor for the fold recursion.
#[derive(Debug, Clone)]
pub struct FfaExecutor<T: Float> {
    /// Custom stage pass (e.g., for parallel execution).
    pub custom_stage_pass: Option<StagePassFn<T>>,
}

impl<T: Float> Default for FfaExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FfaExecutor<T> {
    /// Create an executor using the sequential stage pass.
    pub fn new() -> Self {
        Self {
            custom_stage_pass: None,
        }
    }

    /// Set a custom stage pass function (e.g., for parallelization).
    pub fn custom_stage_pass(mut self, pass: Option<StagePassFn<T>>) -> Self {
        self.custom_stage_pass = pass;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Run the full recursion: `log2(nRow)` stages.
    ///
    /// The row count must be a power of two; a single-row buffer performs
    /// zero stages and is returned unchanged.
    pub fn run(&self, initial: FoldBuffer<T>) -> Result<FoldOutput<T>, FfaError> {
        Validator::validate_full_run(&initial)?;
        let n_stage = initial.full_stage_count();
        self.run_stages(initial, n_stage)
    }

    /// Run an explicit number of stages (partial refinement).
    ///
    /// `n_stage` may be anything from 0 (input returned unchanged) up to
    /// the largest stage whose group size still divides `nRow`; past that
    /// some rows would skip the pass, so the run is rejected as
    /// degenerate before stage 1.
    pub fn run_stages(
        &self,
        initial: FoldBuffer<T>,
        n_stage: usize,
    ) -> Result<FoldOutput<T>, FfaError> {
        Validator::validate_stage_count(&initial, n_stage)?;

        if n_stage == 0 {
            return Ok(FoldOutput {
                profiles: initial,
                stages: 0,
                padded_samples: 0,
            });
        }

        let (n_row, n_col) = initial.shape();
        let stage_pass = self.custom_stage_pass.unwrap_or(shift_add_stage);

        let mut buf_a = initial;
        let mut buf_b = FoldBuffer::zeros(n_row, n_col)?;

        for stage in 1..=n_stage {
            let plan = Butterfly::plan(stage);
            // Odd stages read A and write B; even stages the reverse.
            let (source, destination) = if stage % 2 == 1 {
                (&buf_a, &mut buf_b)
            } else {
                (&buf_b, &mut buf_a)
            };
            stage_pass(source, destination, &plan);
        }

        // The destination of the final stage holds the result.
        let profiles = if n_stage % 2 == 1 { buf_b } else { buf_a };

        Ok(FoldOutput {
            profiles,
            stages: n_stage,
            padded_samples: 0,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
