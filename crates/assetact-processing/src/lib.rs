//! Asset action engine
//!
//! Turns one source asset into derived artifacts according to an ordered list
//! of action parameter sets. Images run through a fixed pipeline
//! (format -> autorotate -> convert -> compress), always emitting a
//! correctly-oriented, size-bounded PNG; documents are wrapped into
//! single-entry zip archives.

pub mod compression;
pub mod document;
pub mod image;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use compression::PngCompressor;
pub use document::DocumentAction;
pub use runner::{DocumentFile, FileStrategy, ImageFile};
// `crate::` disambiguates from the image crate itself
pub use crate::image::{GeometryTransformer, ImageAction, Orientation, OrientationNormalizer};
