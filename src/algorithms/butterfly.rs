//! Butterfly schedule for one fold-doubling stage.
//!
//! ## Purpose
//!
//! Each FFA stage adds pairs of rows A and B, with B cyclically shifted.
//! This module computes, once per stage, which rows pair up and by how
//! much B is shifted for every output row of a group. The same schedule
//! applies to every group of the stage, so the stage driver plans it once
//! and reuses it.
//!
//! ## Key concepts
//!
//! ### Dyadic shift schedule
//!
//! For output row `i` of a group of `2^stage` rows:
//!
//! * `rowA = i / 2`: drawn from the first half of the group,
//! * `rowB = rowA + groupRows / 2`: same relative position in the
//!   second half,
//! * `shift = (i + 1) / 2`: the sequence 0,1,1,2,2,3,3,...
//!
//! The shift sequence is the binary decomposition of the trial-period
//! refinement: it makes one doubling pass synthesize every intermediate
//! sub-period candidate, not just the period and half-period.
//!
//! ## Invariants
//!
//! * All three tables have exactly `2^stage` entries.
//! * `rowA` entries lie in the first half of the group, `rowB` entries in
//!   the second half.
//! * Shifts are non-negative and at most `groupRows / 2`.
//!
//! ## Visibility
//!
//! Internal to the engine and algorithm layers; exposed for callers that
//! drive stages manually.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Precomputed row-combination schedule for one stage.
///
/// Shifts are carried as `isize`: they are non-negative as planned here,
/// but the combiner reduces them with a Euclidean modulo so a negative
/// shift from a future caller still indexes correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Butterfly {
    /// First-operand row per output row, relative to the group start.
    row_a: Vec<usize>,

    /// Second-operand row per output row, relative to the group start.
    row_b: Vec<usize>,

    /// Cyclic bin shift applied to the second operand per output row.
    shift: Vec<isize>,
}

impl Butterfly {
    /// Plan the schedule for `stage` (group of `2^stage` rows).
    pub fn plan(stage: usize) -> Self {
        let group_rows = 1usize << stage;
        let half = group_rows / 2;

        let mut row_a = Vec::with_capacity(group_rows);
        let mut row_b = Vec::with_capacity(group_rows);
        let mut shift = Vec::with_capacity(group_rows);

        for i in 0..group_rows {
            row_a.push(i / 2);
            row_b.push(i / 2 + half);
            shift.push(((i + 1) / 2) as isize);
        }

        Self {
            row_a,
            row_b,
            shift,
        }
    }

    /// Rows per group at this stage.
    #[inline]
    pub fn group_rows(&self) -> usize {
        self.row_a.len()
    }

    /// First-operand row for output row `i`.
    #[inline]
    pub fn row_a(&self, i: usize) -> usize {
        self.row_a[i]
    }

    /// Second-operand row for output row `i`.
    #[inline]
    pub fn row_b(&self, i: usize) -> usize {
        self.row_b[i]
    }

    /// Cyclic shift of the second operand for output row `i`.
    #[inline]
    pub fn shift(&self, i: usize) -> isize {
        self.shift[i]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_one_pairs_adjacent_rows() {
        let plan = Butterfly::plan(1);
        assert_eq!(plan.group_rows(), 2);
        assert_eq!((plan.row_a(0), plan.row_b(0), plan.shift(0)), (0, 1, 0));
        assert_eq!((plan.row_a(1), plan.row_b(1), plan.shift(1)), (0, 1, 1));
    }

    #[test]
    fn stage_two_schedule() {
        let plan = Butterfly::plan(2);
        assert_eq!(plan.group_rows(), 4);
        let rows: Vec<_> = (0..4)
            .map(|i| (plan.row_a(i), plan.row_b(i), plan.shift(i)))
            .collect();
        assert_eq!(rows, vec![(0, 2, 0), (0, 2, 1), (1, 3, 1), (1, 3, 2)]);
    }

    #[test]
    fn shift_sequence_is_dyadic() {
        let plan = Butterfly::plan(3);
        let shifts: Vec<_> = (0..plan.group_rows()).map(|i| plan.shift(i)).collect();
        assert_eq!(shifts, vec![0, 1, 1, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn operands_come_from_opposite_halves() {
        let plan = Butterfly::plan(4);
        let half = plan.group_rows() / 2;
        for i in 0..plan.group_rows() {
            assert!(plan.row_a(i) < half);
            assert!(plan.row_b(i) >= half && plan.row_b(i) < plan.group_rows());
            assert_eq!(plan.row_b(i), plan.row_a(i) + half);
        }
    }
}
