//! Synthetic test images and noise.
//!
//! The two gradient builders produce the same picture; they differ only in how
//! they touch memory (per-pixel indexed writes vs whole-row fills), which is
//! what the `gray_shades` binary times.
use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageViewMut};
use log::debug;
use rand::Rng;

/// Intensity of row `y` in a top-to-bottom 0..=255 ramp of `height` rows.
#[inline]
pub fn gradient_level(y: usize, height: usize) -> u8 {
    if height <= 1 {
        return 0;
    }
    (y as f32 / (height - 1) as f32 * 255.0) as u8
}

fn check_size(width: usize, height: usize) -> Result<(), FilterError> {
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyInput { width, height });
    }
    Ok(())
}

/// Vertical gradient written one pixel at a time through `set`.
pub fn vertical_gradient_indexed(width: usize, height: usize) -> Result<GrayImageU8, FilterError> {
    check_size(width, height)?;
    let mut img = GrayImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, gradient_level(y, height));
        }
    }
    Ok(img)
}

/// Vertical gradient written row by row.
pub fn vertical_gradient_rows(width: usize, height: usize) -> Result<GrayImageU8, FilterError> {
    check_size(width, height)?;
    let mut img = GrayImageU8::new(width, height);
    for y in 0..height {
        img.row_mut(y).fill(gradient_level(y, height));
    }
    Ok(img)
}

/// Corrupt each pixel with probability `percent / 100`, setting it to 0 or
/// 255 with equal odds. Returns the number of corrupted pixels.
pub fn add_salt_and_pepper<I, R>(image: &mut I, percent: u32, rng: &mut R) -> usize
where
    I: ImageViewMut<Pixel = u8>,
    R: Rng + ?Sized,
{
    let percent = percent.min(100);
    let mut corrupted = 0;
    if percent == 0 {
        return corrupted;
    }
    for y in 0..image.height() {
        for px in image.row_mut(y) {
            if rng.random_range(1..=100u32) <= percent {
                *px = if rng.random_bool(0.5) { 255 } else { 0 };
                corrupted += 1;
            }
        }
    }
    debug!("salt and pepper: {corrupted} pixels corrupted at {percent}%");
    corrupted
}
