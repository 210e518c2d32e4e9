//! High-level API for Fast Folding Algorithm searches.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the
//! crate: a fluent builder for configuring a fold, plus re-exports of
//! every public type a caller needs.
//!
//! ## Key concepts
//!
//! ### Builder Pattern
//! The [`Ffa`] builder provides a fluent API:
//! ```text
//! Ffa::<f64>::new()
//!     .fill_value(0.0)
//!     .pad_pow2(true)
//!     .build()?
//!     .fold(&series, p0)?
//! ```
//!
//! ### Output
//! A successful fold returns a [`FoldOutput`]: one folded profile per
//! row, covering every dyadic trial-period refinement representable at
//! that row resolution. Mapping a row index back to a physical trial
//! period is the consumer's responsibility.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use core::result;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchFfa, BatchFfaBuilder};
pub use crate::algorithms::butterfly::Butterfly;
pub use crate::engine::executor::{FfaExecutor, StagePassFn};
pub use crate::engine::output::FoldOutput;
pub use crate::input::SeriesInput;
pub use crate::primitives::buffer::FoldBuffer;
pub use crate::primitives::errors::FfaError;
pub use crate::primitives::wrap::wrap_series;

#[cfg(feature = "parallel")]
pub use crate::engine::parallel::shift_add_stage_parallel;

/// Result type alias for FFA operations.
pub type Result<T> = result::Result<T, FfaError>;

/// Fluent builder entry point for configuring and running a fold.
pub type Ffa<T> = BatchFfaBuilder<T>;

// ============================================================================
// Tests
// ============================================================================
