#![doc = include_str!("../README.md")]

pub mod compare;
pub mod config;
pub mod error;
pub mod gradient;
pub mod image;
pub mod median;
pub mod synth;
pub mod timing;

// --- High-level re-exports -------------------------------------------------

pub use crate::compare::{compare_median_filters, ComparisonSummary, MedianComparison};
pub use crate::error::{FilterError, IoError};
pub use crate::median::{
    median_filter, median_filter_histogram, median_filter_naive, MedianMethod,
};
pub use crate::timing::{Clock, MonotonicClock, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use gray_median::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![128u8; w * h];
/// let img = ImageU8::packed(w, h, &gray);
///
/// let out = median_filter_naive(&img, 5).unwrap();
/// assert_eq!(out.width(), w);
/// assert_eq!(out.get(10, 10), 128);
/// assert_eq!(out.get(0, 0), 0);
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};
    pub use crate::{
        median_filter, median_filter_histogram, median_filter_naive, FilterError, MedianMethod,
    };
}
