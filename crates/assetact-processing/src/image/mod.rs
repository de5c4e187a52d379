//! Image action pipeline
//!
//! This module provides the image half of the action engine:
//! - Orientation normalization (orientation)
//! - The two sizing policies, Cover and Contain (geometry)
//! - Pipeline orchestration and the compression retry loop (action)

pub mod action;
pub mod geometry;
pub mod orientation;

pub use action::ImageAction;
pub use geometry::GeometryTransformer;
pub use orientation::{Orientation, OrientationNormalizer};
