//! Size-bounded PNG compression
//!
//! Maps the pipeline's quality value onto a PNG compression level and
//! provides the bounded quality schedule driving the retry loop. Re-encoding
//! always strips source metadata (EXIF never survives into the output).

use assetact_core::ActionError;
use bytes::Bytes;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

/// Byte-size ceiling for a produced artifact.
pub const MAX_SIZE_BYTES: u64 = 5_000_000;
/// Starting quality for each image action.
pub const MAX_QUALITY: i32 = 100;
/// Per-retry quality decrement.
pub const QUALITY_STEP: i32 = 10;
/// The retry loop stops once the next quality would not stay above this.
pub const QUALITY_FLOOR: i32 = 10;

const MAX_COMPRESSION: i32 = 9;
const MIN_COMPRESSION: i32 = 0;

/// PNG compression service
pub struct PngCompressor;

impl PngCompressor {
    /// Map a quality value onto a PNG compression level in `[0, 9]`:
    /// quality 100 encodes at level 0 and every 10-point drop adds one
    /// level, so any deficit of 100 or more saturates at 9.
    pub fn compression_level(quality: i32) -> u8 {
        ((MAX_QUALITY.saturating_sub(quality)) / QUALITY_STEP).clamp(MIN_COMPRESSION, MAX_COMPRESSION)
            as u8
    }

    /// Encode the raster as RGBA PNG at the given quality.
    pub fn encode(img: &DynamicImage, quality: i32) -> Result<Bytes, ActionError> {
        let level = Self::compression_level(quality);
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut buffer = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut buffer,
            Self::compression_type(level),
            PngFilterType::Adaptive,
        );
        encoder
            .write_image(&rgba, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| ActionError::Encode(e.to_string()))?;

        tracing::debug!(
            quality,
            level,
            size_bytes = buffer.len(),
            "Encoded PNG"
        );

        Ok(Bytes::from(buffer))
    }

    /// The encoder exposes three effort settings; bucket the numeric level
    /// onto them.
    fn compression_type(level: u8) -> CompressionType {
        match level {
            0..=2 => CompressionType::Fast,
            3..=6 => CompressionType::Default,
            _ => CompressionType::Best,
        }
    }

    /// Quality schedule for the bounded retry loop: 100, 90, ... stopping
    /// before any value that would not stay above the floor. At most nine
    /// encodes per action.
    pub fn quality_schedule() -> impl Iterator<Item = i32> {
        std::iter::successors(Some(MAX_QUALITY), |q| {
            let next = q - QUALITY_STEP;
            (next > QUALITY_FLOOR).then_some(next)
        })
    }
}
