use crate::error::IoError;
use crate::gradient::DEFAULT_GAIN;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct GradientImageConfig {
    pub input: PathBuf,
    #[serde(default = "default_gain")]
    pub gain: u8,
    pub output_image: PathBuf,
}

fn default_gain() -> u8 {
    DEFAULT_GAIN
}

pub fn load_config(path: &Path) -> Result<GradientImageConfig, IoError> {
    read_json_file(path)
}
