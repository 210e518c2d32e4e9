//! Layer 3: Engine
//!
//! Core execution logic for the fold recursion.
//!
//! This layer orchestrates the multi-stage shift-and-add recursion: it
//! validates inputs once up front, alternates the two fold buffers
//! between source and destination roles, drives one stage pass per
//! doubling, and packages the final profiles.
//!
//! # Module Organization
//!
//! - **executor**: double-buffered orchestration across stages
//! - **validator**: input and configuration validation rules
//! - **output**: structured results (profiles plus run metadata)
//! - **parallel**: rayon stage pass (feature `parallel`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms (butterfly, shift_add)
//!   ↓
//! Layer 1: Primitives (buffer, wrap, errors)
//! ```

/// Double-buffered execution of the fold recursion.
///
/// Provides:
/// - Stage sequencing with buffer-role alternation
/// - A function hook for injecting an alternative stage pass
/// - Partial-refinement runs with an explicit stage count
pub mod executor;

/// Validation utilities.
///
/// Provides:
/// - Fail-fast shape and stage-count checks
/// - Series finiteness checks
/// - Shared validation logic for adapters and the executor
pub mod validator;

/// Output types for fold operations.
///
/// Provides:
/// - The `FoldOutput` container struct
/// - Row-view accessors over the folded profiles
pub mod output;

/// Parallel stage pass built on rayon.
///
/// Provides:
/// - Group-parallel execution of one stage
/// - Bit-identical results to the sequential driver
#[cfg(feature = "parallel")]
pub mod parallel;
