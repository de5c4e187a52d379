//! Action parameter and result models
//!
//! An action is a named transformation recipe applied to one source asset.
//! Caller-supplied fields are merged over the documented defaults (caller
//! values win); unknown keys are ignored rather than rejected.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const NAME_DEFAULT: &str = "default_name";
pub const WIDTH_DEFAULT: u32 = 1000;
pub const HEIGHT_DEFAULT: u32 = 1000;
pub const PADDING_DEFAULT: Option<bool> = Some(true);

/// Validated, defaulted configuration for one transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionParameters {
    /// Identifies the result in the output set.
    pub name: String,
    /// Target width in pixels; `0` inherits the source width.
    pub width: u32,
    /// Target height in pixels; `0` inherits the source height.
    pub height: u32,
    /// Joint presence of `keep_aspect_ratio` and `padding` selects the
    /// Contain policy; when either is null the image covers the canvas and
    /// overflow is cropped.
    pub keep_aspect_ratio: Option<bool>,
    /// Governs padding fill when Contain is used without aspect-ratio
    /// preservation.
    pub padding: Option<bool>,
}

impl Default for ActionParameters {
    fn default() -> Self {
        Self {
            name: NAME_DEFAULT.to_string(),
            width: WIDTH_DEFAULT,
            height: HEIGHT_DEFAULT,
            keep_aspect_ratio: None,
            padding: PADDING_DEFAULT,
        }
    }
}

impl ActionParameters {
    /// Build parameters from a caller-supplied JSON map. Absent fields take
    /// their defaults; dimensions are typed non-negative, so negative or
    /// non-numeric values are rejected here rather than propagating into the
    /// geometry transform.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Resolve zero width/height against the source's native dimensions.
    /// Called exactly once per action, before any transform runs; the
    /// resolved values are never re-queried afterward.
    pub fn resolve_dimensions(&self, source_width: u32, source_height: u32) -> ResolvedDimensions {
        ResolvedDimensions {
            width: if self.width != 0 {
                self.width
            } else {
                source_width
            },
            height: if self.height != 0 {
                self.height
            } else {
                source_height
            },
        }
    }

    /// Contain applies only when both flags are present; everything else is
    /// Cover.
    pub fn sizing_policy(&self) -> SizingPolicy {
        match (self.keep_aspect_ratio, self.padding) {
            (Some(keep_aspect_ratio), Some(padding)) => SizingPolicy::Contain {
                keep_aspect_ratio,
                padding,
            },
            _ => SizingPolicy::Cover,
        }
    }
}

/// Width/height after zero-inheritance resolution; always concrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDimensions {
    pub width: u32,
    pub height: u32,
}

/// The two mutually exclusive conversion policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Fill the entire target canvas, cropping overflow. Transparent
    /// background.
    Cover,
    /// Fit the source within the target canvas; opaque black fill.
    Contain {
        keep_aspect_ratio: bool,
        padding: bool,
    },
}

/// Descriptor for one produced artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub name: String,
    pub path: PathBuf,
}
