//! Shift-and-add passes: the FFA group combiner and stage driver.
//!
//! ## Purpose
//!
//! This module implements one fold-doubling step. The group combiner
//! merges one contiguous block of source rows into the matching block of
//! destination rows under the stage's [`Butterfly`] schedule; the stage
//! driver partitions a whole buffer into such blocks and combines each
//! one. Together they perform a complete stage of the recursion.
//!
//! ## Design notes
//!
//! * **Disjoint buffers**: the combiner always reads the source buffer
//!   and writes the destination buffer; within one stage no value is read
//!   after being overwritten (strict double buffering, enforced by the
//!   executor).
//! * **Group locality**: destination rows of a group depend only on
//!   source rows of the same group, so groups may run in any order,
//!   including concurrently (see `engine::parallel`).
//! * **Euclidean modulo**: the cyclic bin lookup reduces `j + shift` with
//!   `rem_euclid`, which stays correct even for negative shifts.
//!
//! ## Invariants
//!
//! * Every destination element of a stage is written exactly once, from
//!   exactly two source elements.
//! * Source and destination slices have identical lengths, a whole number
//!   of groups each.
//!
//! ## Non-goals
//!
//! * This module does not validate buffer shapes (handled by `validator`).
//! * This module does not manage buffer roles across stages (handled by
//!   the executor).

use crate::algorithms::butterfly::Butterfly;
use crate::primitives::buffer::FoldBuffer;
use num_traits::Float;

/// Cyclic bin index with a non-negative (Euclidean) reduction.
#[inline]
pub(crate) fn cyclic_index(idx: isize, n_col: usize) -> usize {
    idx.rem_euclid(n_col as isize) as usize
}

// ============================================================================
// Group Combiner
// ============================================================================

/// Combine one group of rows: `group[i][j] = group0[rowA][j] + group0[rowB][(j + shift) mod nCol]`.
///
/// `group0` and `group` are flat row-major slices of `plan.group_rows()`
/// rows by `n_col` columns, taken from the source and destination buffers
/// at the same row offset.
pub fn group_shift_add<T: Float>(
    group0: &[T],
    group: &mut [T],
    plan: &Butterfly,
    n_col: usize,
) {
    let group_rows = plan.group_rows();
    debug_assert_eq!(group0.len(), group_rows * n_col);
    debug_assert_eq!(group.len(), group_rows * n_col);

    for i in 0..group_rows {
        let a = &group0[plan.row_a(i) * n_col..(plan.row_a(i) + 1) * n_col];
        let b = &group0[plan.row_b(i) * n_col..(plan.row_b(i) + 1) * n_col];
        let out = &mut group[i * n_col..(i + 1) * n_col];
        let shift = plan.shift(i);

        for (j, slot) in out.iter_mut().enumerate() {
            *slot = a[j] + b[cyclic_index(j as isize + shift, n_col)];
        }
    }
}

// ============================================================================
// Stage Driver
// ============================================================================

/// Run one full stage sequentially: combine every group of `source` into
/// the corresponding group of `destination`.
pub fn shift_add_stage<T: Float>(
    source: &FoldBuffer<T>,
    destination: &mut FoldBuffer<T>,
    plan: &Butterfly,
) {
    debug_assert_eq!(source.shape(), destination.shape());
    debug_assert_eq!(source.n_row() % plan.group_rows(), 0);

    let n_col = source.n_col();
    let group_len = plan.group_rows() * n_col;

    for (group0, group) in source
        .as_slice()
        .chunks_exact(group_len)
        .zip(destination.as_mut_slice().chunks_exact_mut(group_len))
    {
        group_shift_add(group0, group, plan, n_col);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(rows: &[&[f64]]) -> FoldBuffer<f64> {
        let n_col = rows[0].len();
        let flat: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        FoldBuffer::from_flat(flat, rows.len(), n_col).unwrap()
    }

    #[test]
    fn cyclic_index_wraps_both_directions() {
        assert_eq!(cyclic_index(0, 4), 0);
        assert_eq!(cyclic_index(5, 4), 1);
        assert_eq!(cyclic_index(-1, 4), 3);
    }

    #[test]
    fn stage_one_two_groups_by_hand() {
        // 4x3 buffer, stage 1: groups are rows 0-1 and rows 2-3.
        let source = buffer(&[
            &[1.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0],
        ]);
        let mut dest = FoldBuffer::zeros(4, 3).unwrap();
        shift_add_stage(&source, &mut dest, &Butterfly::plan(1));

        assert_eq!(dest.row(0), &[1.0, 1.0, 0.0]);
        assert_eq!(dest.row(1), &[1.0, 0.0, 1.0]);
        assert_eq!(dest.row(2), &[1.0, 1.0, 2.0]);
        assert_eq!(dest.row(3), &[1.0, 1.0, 2.0]);
    }

    #[test]
    fn stage_one_of_identity_matches_reference() {
        // Reference fixture from the original FFA test suite.
        let source = buffer(&[
            &[1.0, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0, 0.0],
            &[0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0],
        ]);
        let mut dest = FoldBuffer::zeros(4, 4).unwrap();
        shift_add_stage(&source, &mut dest, &Butterfly::plan(1));

        assert_eq!(dest.row(0), &[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(dest.row(1), &[2.0, 0.0, 0.0, 0.0]);
        assert_eq!(dest.row(2), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(dest.row(3), &[0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn row_zero_is_unshifted_pair_sum() {
        // Base case: shift = 0 at i = 0, so row 0 of every group is the
        // plain sum of the group's half-rows.
        let source = buffer(&[&[3.0, 5.0, 7.0], &[11.0, 13.0, 17.0]]);
        let mut dest = FoldBuffer::zeros(2, 3).unwrap();
        shift_add_stage(&source, &mut dest, &Butterfly::plan(1));
        assert_eq!(dest.row(0), &[14.0, 18.0, 24.0]);
    }

    #[test]
    fn groups_are_independent_of_processing_order() {
        let source = buffer(&[
            &[1.0, 2.0],
            &[3.0, 4.0],
            &[5.0, 6.0],
            &[7.0, 8.0],
        ]);
        let plan = Butterfly::plan(1);
        let n_col = source.n_col();
        let group_len = plan.group_rows() * n_col;

        let mut forward = FoldBuffer::zeros(4, 2).unwrap();
        shift_add_stage(&source, &mut forward, &plan);

        // Combine the same groups in reverse order.
        let mut reversed = FoldBuffer::zeros(4, 2).unwrap();
        for g in (0..source.n_row() / plan.group_rows()).rev() {
            let offset = g * group_len;
            group_shift_add(
                &source.as_slice()[offset..offset + group_len],
                &mut reversed.as_mut_slice()[offset..offset + group_len],
                &plan,
                n_col,
            );
        }

        assert_eq!(forward, reversed);
    }
}
