//! PNG input and output.
//!
//! Loading normalises the master to RGBA8; writing creates parent
//! directories as needed and always overwrites.

use std::fs;
use std::path::Path;

use image::{ColorType, ImageFormat, RgbaImage};

use crate::error::{IconError, Result};

/// A decoded master image plus the colour type it was stored in.
pub struct LoadedMaster {
    pub image: RgbaImage,
    /// Colour type before conversion, `None` if already RGBA8.
    pub converted_from: Option<ColorType>,
}

/// Load a source image and convert it to RGBA8 if needed.
pub fn load_master(path: &Path) -> Result<LoadedMaster> {
    if !path.exists() {
        return Err(IconError::Decode {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
            help: Some("Run `doto-icons compose` to draw a fresh master".to_string()),
        });
    }

    let decoded = image::open(path).map_err(|e| IconError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
        help: None,
    })?;

    let colour = decoded.color();
    let converted_from = (colour != ColorType::Rgba8).then_some(colour);

    Ok(LoadedMaster {
        image: decoded.into_rgba8(),
        converted_from,
    })
}

/// Write an image as PNG, creating the parent directory if needed.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IconError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};
    use tempfile::tempdir;

    #[test]
    fn test_write_png_round_trip() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([220, 38, 38, 255]));
        img.put_pixel(1, 0, Rgba([186, 230, 253, 100]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&img, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (2, 1));
        assert_eq!(back.get_pixel(0, 0).0, [220, 38, 38, 255]);
        assert_eq!(back.get_pixel(1, 0).0, [186, 230, 253, 100]); // Alpha kept
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("webapp").join("public").join("icons").join("a.png");

        write_png(&RgbaImage::new(1, 1), &path).unwrap();
        assert!(path.exists());

        // Directory already exists on the second write
        write_png(&RgbaImage::new(1, 1), &path).unwrap();
    }

    #[test]
    fn test_load_master_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4])), &path).unwrap();

        let loaded = load_master(&path).unwrap();
        assert_eq!(loaded.image.dimensions(), (4, 4));
        assert!(loaded.converted_from.is_none());
    }

    #[test]
    fn test_load_master_converts_grayscale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        GrayImage::from_pixel(3, 3, Luma([200])).save(&path).unwrap();

        let loaded = load_master(&path).unwrap();
        assert_eq!(loaded.converted_from, Some(ColorType::L8));
        assert_eq!(loaded.image.get_pixel(1, 1).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_load_master_missing() {
        let dir = tempdir().unwrap();
        let err = load_master(&dir.path().join("nope.png")).err().unwrap();
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn test_load_master_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, b"not a png").unwrap();

        let err = load_master(&path).err().unwrap();
        assert!(matches!(err, IconError::Decode { .. }));
    }
}
