//! Sobel gradient-magnitude image.
//!
//! - Convolves the 3×3 Sobel pair with border clamping (replicate).
//! - Magnitude `sqrt(gx² + gy²)` is min-max stretched to `[0, 255]`, rounded
//!   to 8 bits, then multiplied by `gain` with saturation so weak edges show
//!   up on screen.
//!
//! A flat input has no dynamic range and maps to all zeros.
use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};
use log::debug;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

pub const DEFAULT_GAIN: u8 = 3;

/// Per-pixel Sobel derivatives and their Euclidean magnitude.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative
    pub gy: ImageF32,
    pub mag: ImageF32,
}

pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, &yy) in y_idx.iter().enumerate() {
                let row = l.row(yy);
                for (kx, &xx) in x_idx.iter().enumerate() {
                    let sample = row[xx];
                    sum_x += sample * SOBEL_KERNEL_X[ky][kx];
                    sum_y += sample * SOBEL_KERNEL_Y[ky][kx];
                }
            }

            gx.set(x, y, sum_x);
            gy.set(x, y, sum_y);
            mag.set(x, y, (sum_x * sum_x + sum_y * sum_y).sqrt());
        }
    }

    Grad { gx, gy, mag }
}

/// Stretch `src` linearly so its minimum maps to 0 and its maximum to 255.
pub fn normalize_min_max(src: &ImageF32) -> GrayImageU8 {
    let mut out = GrayImageU8::new(src.w, src.h);
    let Some((lo, hi)) = src.min_max() else {
        return out;
    };
    let range = hi - lo;
    if range <= f32::EPSILON {
        return out;
    }
    let scale = 255.0 / range;
    for y in 0..src.h {
        for (dst, &v) in out.row_mut(y).iter_mut().zip(src.row(y)) {
            *dst = ((v - lo) * scale).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Edge-strength image of an 8-bit gray input.
pub fn gradient_image<I: ImageView<Pixel = u8>>(
    image: &I,
    gain: u8,
) -> Result<GrayImageU8, FilterError> {
    if image.is_empty() {
        return Err(FilterError::EmptyInput {
            width: image.width(),
            height: image.height(),
        });
    }
    let grad = sobel_gradients(&ImageF32::from_u8(image));
    let mut out = normalize_min_max(&grad.mag);
    if let Some(px) = out.as_mut_slice() {
        for v in px.iter_mut() {
            *v = v.saturating_mul(gain);
        }
    }
    debug!(
        "gradient_image: {}x{} gain={gain}",
        image.width(),
        image.height()
    );
    Ok(out)
}
