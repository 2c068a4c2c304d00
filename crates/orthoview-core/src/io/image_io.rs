use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::Result;

/// Convert 8-bit grey levels, shape = (height, width), into an image buffer.
pub fn to_gray_image(pixels: &Array2<u8>) -> GrayImage {
    let (h, w) = pixels.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Luma([pixels[[row, col]]]));
        }
    }
    img
}

/// Save 8-bit grey levels, choosing the format from the file extension
/// (PNG unless the extension says otherwise).
pub fn save_gray(pixels: &Array2<u8>, path: &Path) -> Result<()> {
    let img = to_gray_image(pixels);
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .unwrap_or(ImageFormat::Png);
    img.save_with_format(path, format)?;
    Ok(())
}
