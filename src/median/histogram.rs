//! Sliding-histogram median (Huang's algorithm).
//!
//! For every interior row the window histogram is built once at the first
//! interior column. Each step right removes the column leaving the window and
//! adds the one entering it, then nudges the running median level up or down until
//! `below <= rank < below + bins[level]` holds again, where `below` counts
//! the window values strictly smaller than `level`.
use super::{interior, validate_kernel};
use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use log::debug;

struct WindowHistogram {
    bins: [usize; 256],
    rank: usize,
    level: usize,
    below: usize,
}

impl WindowHistogram {
    fn new(k: usize) -> Self {
        Self {
            bins: [0; 256],
            rank: k * k / 2,
            level: 0,
            below: 0,
        }
    }

    fn reset(&mut self) {
        self.bins = [0; 256];
        self.level = 0;
        self.below = 0;
    }

    #[inline]
    fn add(&mut self, v: u8) {
        self.bins[v as usize] += 1;
        if (v as usize) < self.level {
            self.below += 1;
        }
    }

    #[inline]
    fn remove(&mut self, v: u8) {
        self.bins[v as usize] -= 1;
        if (v as usize) < self.level {
            self.below -= 1;
        }
    }

    #[inline]
    fn median(&mut self) -> u8 {
        while self.below > self.rank {
            self.level -= 1;
            self.below -= self.bins[self.level];
        }
        while self.below + self.bins[self.level] <= self.rank {
            self.below += self.bins[self.level];
            self.level += 1;
        }
        self.level as u8
    }
}

/// Same output as [`super::median_filter_naive`], with per-pixel cost linear
/// in `k` instead of quadratic.
pub fn median_filter_histogram<I: ImageView<Pixel = u8>>(
    image: &I,
    k: usize,
) -> Result<GrayImageU8, FilterError> {
    let (w, h) = (image.width(), image.height());
    let half = validate_kernel(w, h, k)?;
    let mut out = GrayImageU8::new(w, h);
    let (ys, xs) = interior(w, h, half);
    if ys.is_empty() || xs.is_empty() {
        debug!("median_filter_histogram: kernel {k} leaves no interior in {w}x{h}");
        return Ok(out);
    }
    debug!("median_filter_histogram: {w}x{h} k={k}");

    // k <= min(w, h) here, so k * k <= w * h cannot overflow
    let mut hist = WindowHistogram::new(k);
    for y in ys {
        let rows = y - half..=y + half;
        hist.reset();
        for yy in rows.clone() {
            for &v in &image.row(yy)[..k] {
                hist.add(v);
            }
        }

        let out_row = out.row_mut(y);
        out_row[xs.start] = hist.median();
        for x in xs.start + 1..xs.end {
            let leaving = x - half - 1;
            let entering = x + half;
            for yy in rows.clone() {
                let src = image.row(yy);
                hist.remove(src[leaving]);
                hist.add(src[entering]);
            }
            out_row[x] = hist.median();
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::median::median_filter_naive;

    fn pseudo_random(w: usize, h: usize, seed: u32) -> GrayImageU8 {
        let mut state = seed;
        let data = (0..w * h)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            })
            .collect();
        GrayImageU8::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn running_median_tracks_updates() {
        let mut hist = WindowHistogram::new(3);
        for v in [10u8, 20, 30, 40, 50, 60, 70, 80, 90] {
            hist.add(v);
        }
        assert_eq!(hist.median(), 50);
        hist.remove(10);
        hist.add(255);
        assert_eq!(hist.median(), 60);
        for (old, new) in [(60u8, 0u8), (70, 0), (80, 0)] {
            hist.remove(old);
            hist.add(new);
        }
        assert_eq!(hist.median(), 30);
    }

    #[test]
    fn rank_holds_for_kernels_past_u32_squares() {
        let k = 92_683usize;
        let hist = WindowHistogram::new(k);
        assert_eq!(hist.rank, 4_295_069_244);
        assert!(hist.rank > u32::MAX as usize);
    }

    #[test]
    fn agrees_with_naive_on_noise() {
        for (k, seed) in [(3usize, 1u32), (5, 2), (7, 3), (9, 4)] {
            let img = pseudo_random(23, 17, seed);
            let fast = median_filter_histogram(&img, k).unwrap();
            let slow = median_filter_naive(&img, k).unwrap();
            assert_eq!(fast, slow, "mismatch for k={k}");
        }
    }

    #[test]
    fn single_interior_column() {
        let img = pseudo_random(5, 9, 7);
        let fast = median_filter_histogram(&img, 5).unwrap();
        let slow = median_filter_naive(&img, 5).unwrap();
        assert_eq!(fast, slow);
    }

    #[test]
    fn oversized_kernel_returns_zeros() {
        let img = pseudo_random(4, 6, 11);
        let out = median_filter_histogram(&img, 7).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 6);
        assert!(out.data().iter().all(|&v| v == 0));
    }
}
