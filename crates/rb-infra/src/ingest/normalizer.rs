use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType, GenericImageView};
use tracing::debug;

use rb_core::config::IngestConfig;
use rb_core::media::{IngestionError, MediaType, NormalizedImage, RawImageInput};
use rb_core::ports::ImageNormalizerPort;

/// Normalizer backed by the `image` codec stack: decode, clamp the
/// dominant axis, redraw, re-encode as JPEG at a fixed quality.
///
/// Re-encoding happens on every accepted selection, including ones that
/// needed no resize, so the output byte size can differ from the input
/// even for small images.
pub struct RasterNormalizer {
    max_dimension: u32,
    jpeg_quality: f32,
    max_input_bytes: Option<usize>,
}

impl RasterNormalizer {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            max_dimension: config.max_dimension,
            jpeg_quality: config.jpeg_quality,
            max_input_bytes: config.max_input_bytes,
        }
    }
}

#[async_trait::async_trait]
impl ImageNormalizerPort for RasterNormalizer {
    async fn normalize(&self, raw: &RawImageInput) -> Result<NormalizedImage, IngestionError> {
        // Declared-type check only; a mislabeled file proceeds to decode
        // and fails there instead.
        if !raw.media_type.is_image() {
            return Err(IngestionError::NotAnImage(raw.media_type.clone()));
        }
        if let Some(limit) = self.max_input_bytes {
            if raw.len() > limit {
                return Err(IngestionError::TooLarge {
                    actual: raw.len(),
                    limit,
                });
            }
        }

        let decoded = image::load_from_memory(&raw.bytes).map_err(IngestionError::decode)?;
        let (width, height) = decoded.dimensions();
        let (target_width, target_height) =
            scaled_dimensions(width, height, self.max_dimension);
        debug!(
            width,
            height, target_width, target_height, "normalizing selected image"
        );

        let resized = if target_width == width && target_height == height {
            decoded
        } else {
            image::DynamicImage::ImageRgba8(image::imageops::resize(
                &decoded,
                target_width,
                target_height,
                FilterType::Triangle,
            ))
        };

        // JPEG carries no alpha channel
        let rgb = resized.to_rgb8();
        let (out_width, out_height) = rgb.dimensions();
        let mut jpeg_bytes = Vec::new();
        let encoder =
            JpegEncoder::new_with_quality(&mut jpeg_bytes, quality_factor(self.jpeg_quality));
        encoder
            .encode(rgb.as_raw(), out_width, out_height, ColorType::Rgb8.into())
            .map_err(IngestionError::decode)?;

        Ok(NormalizedImage::from_encoded_bytes(
            MediaType::image_jpeg(),
            out_width,
            out_height,
            &jpeg_bytes,
        ))
    }
}

/// Map the 0.0..=1.0 quality factor onto the encoder's 1..=100 scale.
fn quality_factor(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Aspect-preserving, single-axis-driven clamp: only the dominant axis
/// is compared against the bound, the other edge is derived. Never
/// upscales.
fn scaled_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width >= height && width > max_edge {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else if height > max_edge {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    } else {
        (width, height)
    }
}
