//! Geometry transformer - the two sizing policies
//!
//! Cover scales the source to fully cover the requested canvas and
//! center-crops the overflow; Contain fits the source within the canvas,
//! either padding to the exact canvas size with an opaque black fill or
//! scaling only (canvas size not forced).

use assetact_core::{ResolvedDimensions, SizingPolicy};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Fill color for Contain padding.
const PAD_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub struct GeometryTransformer;

impl GeometryTransformer {
    /// Apply the selected sizing policy. Dimensions have already been
    /// resolved against the source, so both are concrete and positive.
    pub fn apply(
        img: DynamicImage,
        dims: ResolvedDimensions,
        policy: SizingPolicy,
    ) -> DynamicImage {
        match policy {
            SizingPolicy::Cover => Self::cover(img, dims),
            SizingPolicy::Contain {
                keep_aspect_ratio,
                padding,
            } => Self::contain(img, dims, keep_aspect_ratio, padding),
        }
    }

    /// Scale to fully cover the canvas, center-cropping overflow. Output is
    /// exactly `width x height`; background stays transparent.
    fn cover(img: DynamicImage, dims: ResolvedDimensions) -> DynamicImage {
        tracing::debug!(width = dims.width, height = dims.height, "Applying cover policy");

        img.resize_to_fill(dims.width, dims.height, Self::select_filter(&img, dims))
    }

    /// Fit within the canvas preserving the source aspect ratio.
    ///
    /// With `keep_aspect_ratio` the fitted raster is the output (the larger
    /// dimension matches the corresponding canvas dimension). Without it the
    /// `padding` flag decides whether the fitted raster is composited
    /// centered onto an exact-size black canvas.
    fn contain(
        img: DynamicImage,
        dims: ResolvedDimensions,
        keep_aspect_ratio: bool,
        padding: bool,
    ) -> DynamicImage {
        tracing::debug!(
            width = dims.width,
            height = dims.height,
            keep_aspect_ratio,
            padding,
            "Applying contain policy"
        );

        let filter = Self::select_filter(&img, dims);
        let fitted = img.resize(dims.width, dims.height, filter);

        if keep_aspect_ratio || !padding {
            return fitted;
        }

        let mut canvas = RgbaImage::from_pixel(dims.width, dims.height, PAD_FILL);
        let x = i64::from(dims.width.saturating_sub(fitted.width())) / 2;
        let y = i64::from(dims.height.saturating_sub(fitted.height())) / 2;
        imageops::overlay(&mut canvas, &fitted.to_rgba8(), x, y);

        DynamicImage::ImageRgba8(canvas)
    }

    /// Lanczos for downscales, Catmull-Rom for upscales (sharper on
    /// enlargement, fewer ringing artifacts).
    fn select_filter(img: &DynamicImage, dims: ResolvedDimensions) -> FilterType {
        let (width, height) = img.dimensions();
        if dims.width >= width && dims.height >= height {
            FilterType::CatmullRom
        } else {
            FilterType::Lanczos3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    fn dims(width: u32, height: u32) -> ResolvedDimensions {
        ResolvedDimensions { width, height }
    }

    #[test]
    fn test_cover_output_is_exactly_canvas_sized() {
        for (sw, sh) in [(350, 150), (150, 350), (1000, 1000), (3, 5)] {
            let out = GeometryTransformer::apply(gradient(sw, sh), dims(1920, 1080), SizingPolicy::Cover);
            assert_eq!(out.dimensions(), (1920, 1080));
        }
    }

    #[test]
    fn test_cover_downscale() {
        let out = GeometryTransformer::apply(gradient(4000, 2000), dims(200, 100), SizingPolicy::Cover);
        assert_eq!(out.dimensions(), (200, 100));
    }

    #[test]
    fn test_contain_padded_output_is_exactly_canvas_sized() {
        let policy = SizingPolicy::Contain {
            keep_aspect_ratio: false,
            padding: true,
        };
        let out = GeometryTransformer::apply(gradient(350, 150), dims(1920, 1080), policy);
        assert_eq!(out.dimensions(), (1920, 1080));
    }

    #[test]
    fn test_contain_padding_fill_is_opaque_black() {
        let policy = SizingPolicy::Contain {
            keep_aspect_ratio: false,
            padding: true,
        };
        // A wide source fitted into a tall canvas leaves bands above and
        // below the centered image.
        let out = GeometryTransformer::apply(gradient(400, 100), dims(400, 400), policy);
        let rgba = out.to_rgba8();
        assert_eq!(*rgba.get_pixel(0, 0), PAD_FILL);
        assert_eq!(*rgba.get_pixel(399, 399), PAD_FILL);
        // Center row holds image data, not fill.
        assert_eq!(rgba.get_pixel(200, 200)[3], 255);
    }

    #[test]
    fn test_contain_without_padding_keeps_fitted_size() {
        let policy = SizingPolicy::Contain {
            keep_aspect_ratio: false,
            padding: false,
        };
        let out = GeometryTransformer::apply(gradient(350, 150), dims(1920, 1080), policy);
        // Fit within 1920x1080: width-bound, height scales with the source
        // ratio.
        let (w, h) = out.dimensions();
        assert_eq!(w, 1920);
        assert!((h as i64 - 823).abs() <= 1, "height was {h}");
    }

    #[test]
    fn test_contain_keep_aspect_ratio_scales_without_forcing_canvas() {
        let policy = SizingPolicy::Contain {
            keep_aspect_ratio: true,
            padding: true,
        };
        let out = GeometryTransformer::apply(gradient(350, 150), dims(1920, 1080), policy);
        let (w, h) = out.dimensions();

        // Larger dimension matches the requested width; aspect preserved
        // within a pixel of rounding.
        assert_eq!(w, 1920);
        let expected_h = (1920.0 * 150.0 / 350.0_f64).round() as i64;
        assert!((h as i64 - expected_h).abs() <= 1, "height was {h}");
    }

    #[test]
    fn test_contain_keep_aspect_ratio_height_bound() {
        let policy = SizingPolicy::Contain {
            keep_aspect_ratio: true,
            padding: true,
        };
        let out = GeometryTransformer::apply(gradient(150, 350), dims(1920, 1080), policy);
        let (w, h) = out.dimensions();

        assert_eq!(h, 1080);
        let expected_w = (1080.0 * 150.0 / 350.0_f64).round() as i64;
        assert!((w as i64 - expected_w).abs() <= 1, "width was {w}");
    }

    #[test]
    fn test_cover_preserves_alpha_channel() {
        // Semi-transparent source stays semi-transparent after cover.
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 128])));
        let out = GeometryTransformer::apply(img, dims(50, 50), SizingPolicy::Cover);
        assert_eq!(out.to_rgba8().get_pixel(25, 25)[3], 128);
    }
}
