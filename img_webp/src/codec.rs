//! Codec boundary
//!
//! `ImageCodec` is the seam between the batch control flow and the pixel
//! work. `WebpCodec` decodes with the `image` crate and encodes with libwebp,
//! since `image` only ships a lossless WebP encoder.

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};
use std::io::Cursor;

pub trait ImageCodec {
    /// Decodes `bytes` into an upright image: any EXIF orientation is applied
    /// to the pixels and the tag is consumed.
    fn decode(&self, bytes: &[u8]) -> ImageResult<DynamicImage>;

    /// Lossy WebP at `quality` (0-100).
    fn encode_webp(&self, image: &DynamicImage, quality: f32) -> Result<Vec<u8>, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl ImageCodec for WebpCodec {
    fn decode(&self, bytes: &[u8]) -> ImageResult<DynamicImage> {
        // sniff the content; a mislabelled PNG inside `x.jpg` still converts
        let mut decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_decoder()?;
        let orientation = decoder.orientation()?;
        let mut image = DynamicImage::from_decoder(decoder)?;
        image.apply_orientation(orientation);
        Ok(image)
    }

    fn encode_webp(&self, image: &DynamicImage, quality: f32) -> Result<Vec<u8>, String> {
        let (width, height) = (image.width(), image.height());

        let encoded = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
        } else {
            let rgb = image.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
        };

        encoded
            .map(|memory| memory.to_vec())
            .map_err(|e| format!("libwebp rejected {}x{} image: {:?}", width, height, e))
    }
}
