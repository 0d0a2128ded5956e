use crate::error::FilterError;

/// Borrowed 8-bit gray view over caller-owned bytes.
///
/// Rows start every `stride` bytes; bytes past `w` in a row are padding and
/// never read by the filters.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Checked constructor: `stride >= w` and `data` covers the last row.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self, FilterError> {
        let needed = Self::required_len(w, h, stride);
        if stride < w || data.len() < needed {
            return Err(FilterError::BufferSize {
                expected: needed.max(w * h),
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride,
            data,
        })
    }

    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Bytes needed to hold `h` rows of `w` pixels spaced `stride` apart.
    pub fn required_len(w: usize, h: usize, stride: usize) -> usize {
        if w == 0 || h == 0 {
            0
        } else {
            stride * (h - 1) + w
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn last_row_may_omit_padding() {
        let raw = [1u8, 2, 0, 3, 4];
        let view = ImageU8::new(2, 2, 3, &raw).unwrap();
        assert_eq!(view.row(1), &[3, 4]);
        assert!(view.as_slice().is_none());
    }

    #[test]
    fn short_buffer_is_rejected() {
        let raw = [0u8; 7];
        let err = ImageU8::new(4, 2, 4, &raw).unwrap_err();
        assert_eq!(
            err,
            FilterError::BufferSize {
                expected: 8,
                actual: 7
            }
        );
        assert!(ImageU8::new(4, 2, 3, &[0u8; 16]).is_err());
    }
}
