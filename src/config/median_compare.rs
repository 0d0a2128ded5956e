use crate::error::IoError;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct MedianCompareConfig {
    pub input: PathBuf,
    #[serde(default = "default_kernel_size")]
    pub kernel_size: usize,
    pub output: MedianCompareOutput,
}

#[derive(Debug, Deserialize)]
pub struct MedianCompareOutput {
    pub naive_image: PathBuf,
    pub fast_image: PathBuf,
    /// Optional timing/agreement report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

fn default_kernel_size() -> usize {
    7
}

pub fn load_config(path: &Path) -> Result<MedianCompareConfig, IoError> {
    read_json_file(path)
}
