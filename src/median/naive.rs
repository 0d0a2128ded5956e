use super::{interior, validate_kernel};
use crate::error::FilterError;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use log::debug;

/// Middle element of an odd-length window (partially reorders `window`).
///
/// Panics on an empty window.
#[inline]
pub fn median_of(window: &mut [u8]) -> u8 {
    let mid = window.len() / 2;
    *window.select_nth_unstable(mid).1
}

/// Reference median filter: each interior pixel becomes the median of its
/// `k × k` neighborhood, copied out of the source with explicit row slices.
pub fn median_filter_naive<I: ImageView<Pixel = u8>>(
    image: &I,
    k: usize,
) -> Result<GrayImageU8, FilterError> {
    let (w, h) = (image.width(), image.height());
    let half = validate_kernel(w, h, k)?;
    let mut out = GrayImageU8::new(w, h);
    let (ys, xs) = interior(w, h, half);
    if ys.is_empty() || xs.is_empty() {
        debug!("median_filter_naive: kernel {k} leaves no interior in {w}x{h}");
        return Ok(out);
    }
    debug!("median_filter_naive: {w}x{h} k={k} interior rows={ys:?} cols={xs:?}");

    // k <= min(w, h) here, so k * k <= w * h cannot overflow
    let mut window = Vec::with_capacity(k * k);
    for y in ys {
        let out_row = out.row_mut(y);
        for x in xs.clone() {
            window.clear();
            for yy in y - half..=y + half {
                window.extend_from_slice(&image.row(yy)[x - half..=x + half]);
            }
            out_row[x] = median_of(&mut window);
        }
    }
    Ok(out)
}
