// Copyright @yucwang 2026

use image::error::{ImageError, ImageResult, ParameterError, ParameterErrorKind};
use image::GrayImage;

use crate::math::bitmap::Bitmap;

/// Map radiance to an 8-bit sRGB code with an exponential shoulder.
pub fn tonemap(value: f32, exposure: f32) -> u8 {
    let v = 1.0 - (-exposure * value.max(0.0)).exp();
    let encoded = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Write a tonemapped 8-bit grayscale preview of a radiance image.
pub fn write_png_preview(bitmap: &Bitmap, exposure: f32, file_path: &str) -> ImageResult<()> {
    log::info!("Starting writing png preview: {}.", file_path);

    let pixels: Vec<u8> = bitmap.data().iter().map(|&v| tonemap(v, exposure)).collect();
    let image = GrayImage::from_raw(bitmap.width() as u32, bitmap.height() as u32, pixels)
        .ok_or_else(|| ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch)))?;
    image.save(file_path)?;

    log::info!("PNG written to: {}.", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonemap() {
        assert_eq!(tonemap(0.0, 10.0), 0);
        assert_eq!(tonemap(-1.0, 10.0), 0);
        assert_eq!(tonemap(1e3, 10.0), 255);
        assert!(tonemap(0.01, 10.0) < tonemap(0.02, 10.0));
        assert!(tonemap(0.01, 10.0) < tonemap(0.01, 20.0));
    }

    #[test]
    fn test_png_preview_roundtrip_size() {
        let mut bitmap = Bitmap::new(4, 2);
        bitmap[(1, 1)] = 0.1;
        let path = std::env::temp_dir().join(format!("skyradiance_png_{}.png", std::process::id()));
        let path = path.to_string_lossy().to_string();
        write_png_preview(&bitmap, 10.0, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_luma8();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.dimensions(), (4, 2));
        assert_eq!(loaded.get_pixel(0, 0)[0], 0);
        assert_eq!(loaded.get_pixel(1, 1)[0], tonemap(0.1, 10.0));
    }
}
