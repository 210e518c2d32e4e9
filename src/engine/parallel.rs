//! Parallel stage pass for the fold recursion.
//!
//! ## Purpose
//!
//! This module provides the group-parallel stage pass that is injected
//! into the executor's `StagePassFn` hook. Groups within one stage touch
//! disjoint row ranges of source and destination, so they map directly
//! onto rayon's chunked parallel iterators with no synchronization beyond
//! the implicit join at the end of the pass.
//!
//! ## Design notes
//!
//! * **Implementation**: a drop-in replacement for the sequential
//!   [`shift_add_stage`](crate::algorithms::shift_add::shift_add_stage).
//! * **Parallelism**: `par_chunks_exact_mut` partitions the destination
//!   into per-group chunks; each worker reads only the matching source
//!   chunk.
//! * **Determinism**: every destination element has exactly one writer,
//!   so results are bit-identical to the sequential pass regardless of
//!   worker scheduling.
//! * **Stage barrier**: rayon's `for_each` returns only after all groups
//!   finish, which is the required join between stages.
//!
//! ## Invariants
//!
//! * Workers are assigned disjoint destination row ranges.
//! * The butterfly schedule is shared read-only across workers.
//!
//! ## Non-goals
//!
//! * This module does not parallelize across stages (data-dependent,
//!   strictly sequential).
//! * This module does not validate input data (handled by `validator`).

use rayon::prelude::*;

use crate::algorithms::butterfly::Butterfly;
use crate::algorithms::shift_add::group_shift_add;
use crate::primitives::buffer::FoldBuffer;
use num_traits::Float;

/// Run one full stage with group-level parallelism.
pub fn shift_add_stage_parallel<T>(
    source: &FoldBuffer<T>,
    destination: &mut FoldBuffer<T>,
    plan: &Butterfly,
) where
    T: Float + Send + Sync,
{
    debug_assert_eq!(source.shape(), destination.shape());
    debug_assert_eq!(source.n_row() % plan.group_rows(), 0);

    let n_col = source.n_col();
    let group_len = plan.group_rows() * n_col;

    destination
        .as_mut_slice()
        .par_chunks_exact_mut(group_len)
        .zip(source.as_slice().par_chunks_exact(group_len))
        .for_each(|(group, group0)| group_shift_add(group0, group, plan, n_col));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::shift_add::shift_add_stage;
    use crate::engine::executor::FfaExecutor;

    fn pseudo_random_buffer(n_row: usize, n_col: usize) -> FoldBuffer<f64> {
        // Small LCG keeps the fixture deterministic.
        let mut state = 0x2545f491u64;
        let data: Vec<f64> = (0..n_row * n_col)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 33) as f64 / 1e6
            })
            .collect();
        FoldBuffer::from_flat(data, n_row, n_col).unwrap()
    }

    #[test]
    fn parallel_pass_matches_sequential_pass() {
        let source = pseudo_random_buffer(16, 7);
        for stage in 1..=4 {
            let plan = Butterfly::plan(stage);

            let mut sequential = FoldBuffer::zeros(16, 7).unwrap();
            shift_add_stage(&source, &mut sequential, &plan);

            let mut parallel = FoldBuffer::zeros(16, 7).unwrap();
            shift_add_stage_parallel(&source, &mut parallel, &plan);

            assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn parallel_full_run_matches_sequential_full_run() {
        let initial = pseudo_random_buffer(32, 5);

        let sequential = FfaExecutor::new().run(initial.clone()).unwrap();
        let parallel = FfaExecutor::new()
            .custom_stage_pass(Some(shift_add_stage_parallel))
            .run(initial)
            .unwrap();

        assert_eq!(sequential, parallel);
    }
}
