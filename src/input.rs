//! Input abstraction for sample series.
//!
//! This module defines the `SeriesInput` trait which allows `fold` to
//! accept standard slices, vectors, and (with the `ndarray` feature)
//! one-dimensional ndarray views interchangeably.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitives::errors::FfaError;
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

/// Trait for types usable as an input sample series.
pub trait SeriesInput<T: Float> {
    /// Convert the input to a contiguous slice of samples.
    fn as_series_slice(&self) -> Result<&[T], FfaError>;
}

impl<T: Float> SeriesInput<T> for [T] {
    fn as_series_slice(&self) -> Result<&[T], FfaError> {
        Ok(self)
    }
}

impl<T: Float> SeriesInput<T> for &[T] {
    fn as_series_slice(&self) -> Result<&[T], FfaError> {
        Ok(self)
    }
}

impl<T: Float> SeriesInput<T> for Vec<T> {
    fn as_series_slice(&self) -> Result<&[T], FfaError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> SeriesInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_series_slice(&self) -> Result<&[T], FfaError> {
        self.as_slice().ok_or_else(|| {
            FfaError::InvalidInput("ndarray input must be contiguous in memory".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_vecs_pass_through() {
        let v = vec![1.0f64, 2.0];
        assert_eq!(v.as_series_slice().unwrap(), &[1.0, 2.0]);

        let s: &[f64] = &v;
        assert_eq!(SeriesInput::as_series_slice(s).unwrap(), &[1.0, 2.0]);
    }
}
