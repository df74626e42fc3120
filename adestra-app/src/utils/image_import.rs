//! Image import pipeline
//!
//! Local uploads are embedded into the persisted configuration as
//! self-contained `data:` payloads, so every import is downscaled and
//! re-encoded to keep the stored payload bounded. The same policy applies
//! to profile, hero and service images.

use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::core::error::{AppError, AppResult};

/// Maximum embedded width in pixels; wider images are downscaled
pub const MAX_WIDTH: u32 = 800;

/// JPEG re-encode quality
pub const JPEG_QUALITY: u8 = 70;

/// Decode an uploaded image, downscale it to at most [`MAX_WIDTH`] wide
/// (aspect preserved) and re-encode as a JPEG `data:` URL.
pub fn import_to_data_url(data: &[u8]) -> AppResult<String> {
    let img = image::load_from_memory(data).map_err(|e| AppError::Image(format!("invalid image: {e}")))?;

    let img = if img.width() > MAX_WIDTH {
        let scaled_height =
            ((img.height() as u64 * MAX_WIDTH as u64) / img.width() as u64).max(1) as u32;
        img.resize_exact(MAX_WIDTH, scaled_height, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::Image(format!("failed to compress image: {e}")))?;
    }

    tracing::debug!(bytes = buffer.len(), width = img.width(), "Image imported");
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 80, 40]),
        ));
        let mut buf = Vec::new();
        img.write_with_encoder(image::codecs::png::PngEncoder::new(Cursor::new(&mut buf)))
            .unwrap();
        buf
    }

    fn decode_payload(data_url: &str) -> image::DynamicImage {
        let b64 = data_url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = STANDARD.decode(b64).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn wide_image_is_downscaled_to_max_width() {
        let data_url = import_to_data_url(&png_bytes(1000, 500)).unwrap();
        let img = decode_payload(&data_url);
        assert_eq!(img.width(), MAX_WIDTH);
        assert_eq!(img.height(), 400);
    }

    #[test]
    fn narrow_image_keeps_its_dimensions() {
        let data_url = import_to_data_url(&png_bytes(320, 240)).unwrap();
        let img = decode_payload(&data_url);
        assert_eq!((img.width(), img.height()), (320, 240));
    }

    #[test]
    fn corrupt_input_is_an_image_error() {
        let err = import_to_data_url(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AppError::Image(_)));
    }
}
