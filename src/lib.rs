//! # fastffa
//!
//! Fast Folding Algorithm (FFA) for periodic-signal searches in evenly
//! sampled time series.
//!
//! ## Algorithm
//!
//! Consider an evenly spaced series of N samples folded at a base period
//! P0 into a buffer of shape `(M, P0)`, `M = N / P0`. There are M
//! distinct trial periods reachable from that fold, `P = P0 + i / (M - 1)`
//! for row index `i`; folding each independently costs O(N² / P0) sums.
//! When M is a power of two, the FFA removes the redundant summing by
//! merging adjacent profiles pairwise at geometrically doubling scales:
//! each stage combines row pairs under a dyadic cyclic-shift schedule, and
//! after `log2(M)` stages every row holds the profile of one trial-period
//! refinement, at O(N·log2(N/P0)) total cost.
//!
//! ## Usage
//!
//! ```ignore
//! use fastffa::prelude::*;
//!
//! let output = Ffa::<f64>::new()
//!     .build()?
//!     .fold(&series, p0)?;
//! let best_profile = output.profile(0);
//! ```
//!
//! ## Feature flags
//!
//! * `std` (default): standard library support.
//! * `parallel` (default, implies `std`): rayon group-parallel stage pass.
//! * `ndarray`: accept 1-D ndarray views as series input.
//!
//! Without `std` the crate is `no_std + alloc`; float math routes
//! through `libm` so the `num_traits::Float` bound still resolves.
//!
//! ## References
//!
//! * Staelin (1969), "Fast folding algorithm for detection of periodic
//!   pulse trains".
//! * Kondratiev et al. (2009), on FFA searches for pulsars.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: primitives (fold buffer, series wrapping, errors).
pub mod primitives;

/// Layer 2: algorithms (butterfly schedule, shift-add passes).
pub mod algorithms;

/// Layer 3: engine (executor, validator, output, parallel pass).
pub mod engine;

/// Layer 4: adapters (batch folding of complete series).
pub mod adapters;

/// Layer 5: the public API surface.
pub mod api;

/// Series input abstraction (slices, vectors, optional ndarray).
pub mod input;

/// Convenience re-exports for typical callers.
pub mod prelude {
    pub use crate::api::{
        BatchFfa, Ffa, FfaError, FfaExecutor, FoldBuffer, FoldOutput, Result, SeriesInput,
    };
}
