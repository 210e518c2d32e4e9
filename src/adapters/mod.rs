//! Layer 4: Adapters
//!
//! High-level execution adapters for the fold recursion.
//!
//! This layer adapts the engine for user-facing workflows. A single
//! adapter exists today:
//!
//! - **Batch**: wrap a complete in-memory series at a base period and
//!   fold it in one call
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine (executor, validator, output)
//!   ↓
//! Layer 2: Algorithms (butterfly, shift_add)
//!   ↓
//! Layer 1: Primitives (buffer, wrap, errors)
//! ```

/// Batch adapter for complete series.
///
/// Provides:
/// - Series validation, wrapping, and padding in one call
/// - Parallel execution toggle (feature `parallel`)
/// - Direct folding of pre-reshaped buffers
pub mod batch;
