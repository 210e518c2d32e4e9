//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (FfaError)
//! - **buffer**: The two-dimensional fold buffer
//! - **wrap**: Series extension and wrapping utilities
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
//! Layer 2: Algorithms (butterfly, shift_add)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Fold buffer storage.
///
/// Provides:
/// - Row-major flat storage with an explicit `(nRow, nCol)` descriptor
/// - Bounds-checked row views
/// - Strict constructors for pre-reshaped data
pub mod buffer;

/// Series wrapping utilities.
///
/// Provides:
/// - Extend-and-wrap reshaping at a base period
/// - Trailing-row padding with a configurable fill value
/// - Optional padding of the row count to the next power of two
pub mod wrap;

/// Shared error types.
///
/// Provides:
/// - Unified `FfaError` enum
/// - Specific error variants
/// - Error propagation utilities
pub mod errors;
