//! Square-window median filters over single-channel 8-bit images.
//!
//! Two implementations with identical output:
//!
//! - [`median_filter_naive`]: copies every `k × k` window into a buffer and
//!   selects its middle element. `O(W·H·k²)`.
//! - [`median_filter_histogram`]: keeps a 256-bin histogram of the window and
//!   updates it one column at a time while sliding along a row. `O(W·H·k)`
//!   plus a bounded scan over the bins per pixel.
//!
//! Border handling is the same for both: pixels closer than `h = (k-1)/2` to
//! any edge are never computed and stay at the output's zero fill. When the
//! kernel is larger than the image the whole output stays zero.

mod histogram;
mod naive;

pub use histogram::median_filter_histogram;
pub use naive::{median_filter_naive, median_of};

use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageView};
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianMethod {
    /// Sort/select each window independently.
    #[default]
    Naive,
    /// Sliding 256-bin histogram.
    Histogram,
}

impl MedianMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Histogram => "histogram",
        }
    }
}

/// Filter `image` with a `k × k` median using the chosen implementation.
pub fn median_filter<I: ImageView<Pixel = u8>>(
    image: &I,
    k: usize,
    method: MedianMethod,
) -> Result<GrayImageU8, FilterError> {
    match method {
        MedianMethod::Naive => median_filter_naive(image, k),
        MedianMethod::Histogram => median_filter_histogram(image, k),
    }
}

/// Check the filter arguments and return the half-width `h = (k-1)/2`.
pub fn validate_kernel(width: usize, height: usize, k: usize) -> Result<usize, FilterError> {
    if k == 0 || k % 2 == 0 {
        return Err(FilterError::InvalidKernelSize { k });
    }
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyInput { width, height });
    }
    Ok((k - 1) / 2)
}

/// Interior ranges `(ys, xs)` the filters compute; empty when `2h >= dim`.
pub(crate) fn interior(width: usize, height: usize, half: usize) -> (Range<usize>, Range<usize>) {
    (
        half..height.saturating_sub(half),
        half..width.saturating_sub(half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_kernel_returns_half_width() {
        assert_eq!(validate_kernel(10, 10, 1), Ok(0));
        assert_eq!(validate_kernel(10, 10, 3), Ok(1));
        assert_eq!(validate_kernel(10, 10, 7), Ok(3));
    }

    #[test]
    fn validate_kernel_rejects_even_and_zero() {
        for k in [0usize, 2, 4, 8] {
            let err = validate_kernel(10, 10, k).unwrap_err();
            assert_eq!(err, FilterError::InvalidKernelSize { k });
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn validate_kernel_checks_size_before_emptiness() {
        assert_eq!(
            validate_kernel(0, 0, 4),
            Err(FilterError::InvalidKernelSize { k: 4 })
        );
        assert_eq!(
            validate_kernel(0, 5, 3),
            Err(FilterError::EmptyInput {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn interior_is_empty_for_oversized_kernel() {
        let (ys, xs) = interior(4, 4, 2);
        assert!(ys.is_empty());
        assert!(xs.is_empty());
        let (ys, xs) = interior(5, 3, 1);
        assert_eq!(ys, 1..2);
        assert_eq!(xs, 1..4);
    }

    #[test]
    fn method_deserializes_snake_case() {
        let m: MedianMethod = serde_json::from_str("\"histogram\"").unwrap();
        assert_eq!(m, MedianMethod::Histogram);
        assert_eq!(MedianMethod::default().label(), "naive");
    }
}
