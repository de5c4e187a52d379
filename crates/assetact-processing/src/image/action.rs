//! Image action - pipeline orchestration
//!
//! One `act()` call runs format -> autorotate -> convert -> compress for a
//! single (source image, parameter set) pair. The compression step is a
//! bounded retry loop: every attempt re-runs the whole pipeline from the
//! original source bytes at a lower quality, so quality loss never
//! compounds across retries.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use assetact_core::{
    ActionError, ActionParameters, ActionResult, OutputConfig, ResolvedDimensions, SizingPolicy,
};
use image::{DynamicImage, GenericImageView};

use crate::compression::{PngCompressor, MAX_SIZE_BYTES};
use crate::image::geometry::GeometryTransformer;
use crate::image::orientation::{Orientation, OrientationNormalizer};
use crate::output;

/// Everything one pipeline attempt needs, resolved once per action. The
/// source bytes are immutable; each attempt decodes a fresh working raster
/// from them.
struct PipelineContext<'a> {
    source_path: &'a Path,
    data: &'a [u8],
    orientation: Orientation,
    dims: ResolvedDimensions,
    policy: SizingPolicy,
}

/// Applies one parameter set to one source image, producing a
/// correctly-oriented, correctly-sized, size-bounded PNG.
pub struct ImageAction {
    config: OutputConfig,
}

impl ImageAction {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline and return the result descriptor. Undecodable
    /// sources and filesystem failures propagate as typed errors.
    pub fn act(
        &self,
        source_path: &Path,
        params: &ActionParameters,
    ) -> Result<ActionResult, ActionError> {
        let output_path = output::allocate(&self.config, source_path, &params.name, "png")?;

        let data =
            fs::read(source_path).map_err(|source| ActionError::io(source_path, source))?;
        let orientation = OrientationNormalizer::read_orientation(&data);

        // Resolve zero dimensions against the source exactly once, before
        // any transform runs.
        let source_img = Self::decode(&data, source_path)?;
        let (source_width, source_height) = source_img.dimensions();
        let dims = params.resolve_dimensions(source_width, source_height);
        drop(source_img);

        let ctx = PipelineContext {
            source_path,
            data: &data,
            orientation,
            dims,
            policy: params.sizing_policy(),
        };

        tracing::debug!(
            source = %source_path.display(),
            output = %output_path.display(),
            name = %params.name,
            width = dims.width,
            height = dims.height,
            policy = ?ctx.policy,
            "Running image action"
        );

        // Bounded compression loop. An output still over the ceiling at the
        // quality floor is accepted as best-effort.
        for (attempt, quality) in PngCompressor::quality_schedule().enumerate() {
            let png = Self::manipulate(&ctx, quality)?;
            let size = png.len() as u64;

            fs::write(&output_path, &png)
                .map_err(|source| ActionError::io(&output_path, source))?;

            if size <= MAX_SIZE_BYTES {
                break;
            }

            tracing::debug!(
                attempt = attempt + 1,
                quality,
                size_bytes = size,
                ceiling = MAX_SIZE_BYTES,
                "Output over size ceiling, retrying at lower quality"
            );
        }

        Ok(ActionResult {
            name: params.name.clone(),
            path: output_path,
        })
    }

    /// One pipeline attempt: decode the original bytes, normalize
    /// orientation, apply the sizing policy, encode as PNG at `quality`.
    fn manipulate(ctx: &PipelineContext<'_>, quality: i32) -> Result<bytes::Bytes, ActionError> {
        let img = Self::decode(ctx.data, ctx.source_path)?;
        let (img, _top_left) = OrientationNormalizer::normalize(img, ctx.orientation);
        let img = GeometryTransformer::apply(img, ctx.dims, ctx.policy);
        PngCompressor::encode(&img, quality)
    }

    /// Decode into an RGBA working raster. Re-encoding from this raster
    /// never carries source metadata forward.
    fn decode(data: &[u8], source_path: &Path) -> Result<DynamicImage, ActionError> {
        let reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|source| ActionError::io(source_path, source))?;
        let img = reader
            .decode()
            .map_err(|e| ActionError::decode(source_path, e.to_string()))?;

        Ok(DynamicImage::ImageRgba8(img.to_rgba8()))
    }
}
