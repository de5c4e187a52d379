//! Orientation normalization (rotation and flipping)
//!
//! Reads the embedded EXIF orientation tag and applies the compensating
//! operation so pixel data always reads "top-left, un-rotated". Runs before
//! any geometry transform so cropping and padding see the visually-correct
//! orientation.

use std::io::Cursor;

use image::{imageops, DynamicImage};

/// The eight EXIF orientation tag values. Unrecognized or absent tags read
/// as `TopLeft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    LeftTop,
    RightTop,
    RightBottom,
    LeftBottom,
}

impl Orientation {
    /// Map a raw EXIF tag value (1-8).
    pub fn from_exif(tag: u32) -> Self {
        match tag {
            2 => Orientation::TopRight,
            3 => Orientation::BottomRight,
            4 => Orientation::BottomLeft,
            5 => Orientation::LeftTop,
            6 => Orientation::RightTop,
            7 => Orientation::RightBottom,
            8 => Orientation::LeftBottom,
            _ => Orientation::TopLeft,
        }
    }

    /// Compensating operation as (horizontal flip, clockwise rotation).
    /// The flip is applied before the rotation.
    pub fn transforms(self) -> (bool, Option<u16>) {
        match self {
            Orientation::TopLeft => (false, None),
            Orientation::TopRight => (true, None),
            Orientation::BottomRight => (false, Some(180)),
            Orientation::BottomLeft => (true, Some(180)),
            Orientation::LeftTop => (true, Some(270)),
            Orientation::RightTop => (false, Some(90)),
            Orientation::RightBottom => (true, Some(90)),
            Orientation::LeftBottom => (false, Some(270)),
        }
    }
}

/// Orientation normalizer
pub struct OrientationNormalizer;

impl OrientationNormalizer {
    /// Read the EXIF orientation tag from raw image bytes. Missing or
    /// unreadable metadata reads as top-left.
    pub fn read_orientation(data: &[u8]) -> Orientation {
        let mut cursor = Cursor::new(data);
        match exif::Reader::new().read_from_container(&mut cursor) {
            Ok(meta) => meta
                .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
                .map(Orientation::from_exif)
                .unwrap_or_default(),
            Err(_) => Orientation::TopLeft,
        }
    }

    /// Apply the compensating transform and return the normalized raster
    /// together with the stored tag, which is always top-left afterwards,
    /// even when no operation was applied.
    pub fn normalize(mut img: DynamicImage, orientation: Orientation) -> (DynamicImage, Orientation) {
        let (flip_h, rotate) = orientation.transforms();

        tracing::debug!(
            orientation = ?orientation,
            flip_horizontal = flip_h,
            rotate = ?rotate,
            "Normalizing orientation"
        );

        if flip_h {
            img = Self::flip_horizontal(img);
        }
        if let Some(angle) = rotate {
            img = Self::rotate_by_angle(img, angle);
        }

        (img, Orientation::TopLeft)
    }

    /// Rotate clockwise by 90, 180, or 270 degrees; any other angle is a
    /// no-op.
    pub fn rotate_by_angle(img: DynamicImage, angle: u16) -> DynamicImage {
        match angle {
            90 => DynamicImage::ImageRgba8(imageops::rotate90(&img.to_rgba8())),
            180 => DynamicImage::ImageRgba8(imageops::rotate180(&img.to_rgba8())),
            270 => DynamicImage::ImageRgba8(imageops::rotate270(&img.to_rgba8())),
            _ => img,
        }
    }

    /// Horizontal flip (mirror).
    pub fn flip_horizontal(img: DynamicImage) -> DynamicImage {
        DynamicImage::ImageRgba8(imageops::flip_horizontal(&img.to_rgba8()))
    }
}
