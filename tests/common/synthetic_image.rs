use gray_median::image::GrayImageU8;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> GrayImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = GrayImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img.set(x, y, val);
        }
    }
    img
}

/// Every pixel set to `value`.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> GrayImageU8 {
    GrayImageU8::from_vec(width, height, vec![value; width * height])
        .expect("buffer length matches dimensions")
}

/// Deterministic noise from a 32-bit LCG.
pub fn lcg_noise_u8(width: usize, height: usize, seed: u32) -> GrayImageU8 {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    GrayImageU8::from_vec(width, height, data).expect("buffer length matches dimensions")
}
