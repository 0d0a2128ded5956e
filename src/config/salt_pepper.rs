use crate::error::IoError;
use crate::image::io::read_json_file;
use crate::median::MedianMethod;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SaltPepperConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub denoise: DenoiseConfig,
    pub output: SaltPepperOutput,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Probability in percent that a pixel is replaced by 0 or 255.
    pub percent: u32,
    pub seed: u64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            percent: 10,
            seed: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DenoiseConfig {
    pub kernel_size: usize,
    pub method: MedianMethod,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            method: MedianMethod::Histogram,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaltPepperOutput {
    pub noisy_image: PathBuf,
    pub denoised_image: PathBuf,
}

pub fn load_config(path: &Path) -> Result<SaltPepperConfig, IoError> {
    read_json_file(path)
}
