//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write any 8-bit gray view to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `read_json_file`: parse a JSON file into a deserializable value.
use super::{GrayImageU8, ImageView};
use crate::error::IoError;
use image::{GrayImage, ImageBuffer, Luma};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, IoError> {
    let img = image::open(path)
        .map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    debug!("loaded {} ({width}x{height})", path.display());
    Ok(GrayImageU8::from_vec(width, height, img.into_raw())?)
}

/// Save an 8-bit grayscale view to a PNG (format picked from the extension).
pub fn save_grayscale_u8<I: ImageView<Pixel = u8>>(image: &I, path: &Path) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    let data = match image.as_slice() {
        Some(slice) => slice.to_vec(),
        None => GrayImageU8::from_view(image).into_raw(),
    };
    let out: GrayImage =
        ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(image.width() as u32, image.height() as u32, data)
            .ok_or_else(|| IoError::Buffer {
                path: path.to_path_buf(),
            })?;
    out.save(path).map_err(|source| IoError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| IoError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    let data = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| IoError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
