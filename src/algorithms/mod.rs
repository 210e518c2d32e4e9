//! Layer 2: Algorithms
//!
//! The shift-and-add core of the Fast Folding Algorithm.
//!
//! This layer implements one fold-doubling step: the per-stage butterfly
//! schedule that decides which row pairs combine and by how much the
//! second operand is cyclically shifted, and the shift-add passes that
//! apply the schedule to every group of a buffer.
//!
//! # Module Organization
//!
//! - **butterfly**: per-stage combination schedule (row pairs and shifts)
//! - **shift_add**: group combiner and sequential stage driver
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives (buffer, wrap, errors)
//! ```

/// Butterfly schedule.
///
/// Provides:
/// - Per-stage row-pair tables
/// - The dyadic 0,1,1,2,2,... shift sequence
pub mod butterfly;

/// Shift-and-add passes.
///
/// Provides:
/// - The group combiner (one fold-doubling step per group)
/// - The sequential stage driver over all groups of a buffer
pub mod shift_add;
