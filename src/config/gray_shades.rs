use crate::error::IoError;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GrayShadesConfig {
    pub width: usize,
    pub height: usize,
    pub output_image: PathBuf,
}

impl Default for GrayShadesConfig {
    fn default() -> Self {
        Self {
            width: 5120,
            height: 5120,
            output_image: PathBuf::from("out/gray_shades.png"),
        }
    }
}

pub fn load_config(path: &Path) -> Result<GrayShadesConfig, IoError> {
    read_json_file(path)
}
