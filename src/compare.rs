//! Naive vs histogram median on the same input, timed with a caller clock.
use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageView};
use crate::median::{median_filter, MedianMethod};
use crate::timing::{time_stage, Clock, TimingBreakdown};
use log::{info, warn};
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct MedianComparison {
    pub kernel_size: usize,
    pub naive: GrayImageU8,
    pub fast: GrayImageU8,
    pub timing: TimingBreakdown,
    /// Pixels where the two outputs differ; zero when both are correct.
    pub mismatched_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub width: usize,
    pub height: usize,
    pub kernel_size: usize,
    pub naive_ms: f64,
    pub fast_ms: f64,
    /// `naive_ms / fast_ms`; `None` if the fast pass measured zero time.
    pub speedup: Option<f64>,
    pub mismatched_pixels: usize,
    pub timing: TimingBreakdown,
}

impl MedianComparison {
    pub fn summary(&self) -> ComparisonSummary {
        let naive_ms = self
            .timing
            .stage_ms(MedianMethod::Naive.label())
            .unwrap_or_default();
        let fast_ms = self
            .timing
            .stage_ms(MedianMethod::Histogram.label())
            .unwrap_or_default();
        ComparisonSummary {
            width: self.naive.width(),
            height: self.naive.height(),
            kernel_size: self.kernel_size,
            naive_ms,
            fast_ms,
            speedup: (fast_ms > 0.0).then(|| naive_ms / fast_ms),
            mismatched_pixels: self.mismatched_pixels,
            timing: self.timing.clone(),
        }
    }
}

/// Filter `image` with both median implementations and time each pass.
pub fn compare_median_filters<I, C>(
    image: &I,
    k: usize,
    clock: &C,
) -> Result<MedianComparison, FilterError>
where
    I: ImageView<Pixel = u8>,
    C: Clock + ?Sized,
{
    let start = clock.now_ms();
    let (naive, naive_ms) = time_stage(clock, || median_filter(image, k, MedianMethod::Naive));
    let naive = naive?;
    info!("Processing time (naive median) = {:.3} ms", naive_ms);

    let (fast, fast_ms) = time_stage(clock, || median_filter(image, k, MedianMethod::Histogram));
    let fast = fast?;
    info!("Processing time (histogram median) = {:.3} ms", fast_ms);

    let mut timing = TimingBreakdown::with_total(clock.now_ms() - start);
    timing.push(MedianMethod::Naive.label(), naive_ms);
    timing.push(MedianMethod::Histogram.label(), fast_ms);

    let mismatched_pixels = naive
        .data()
        .iter()
        .zip(fast.data())
        .filter(|(a, b)| a != b)
        .count();
    if mismatched_pixels > 0 {
        warn!("median outputs disagree on {mismatched_pixels} pixels");
    }

    Ok(MedianComparison {
        kernel_size: k,
        naive,
        fast,
        timing,
        mismatched_pixels,
    })
}
