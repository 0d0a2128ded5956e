//! JSON configuration for the demo binaries, one module per tool.
pub mod gradient_image;
pub mod gray_shades;
pub mod median_compare;
pub mod salt_pepper;
