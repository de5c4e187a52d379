//! File action runner
//!
//! Applies an ordered list of parameter sets to one source file, one
//! artifact per set, results in input order. The first failing action aborts
//! the run with its typed error; callers wanting per-action granularity can
//! invoke `ImageAction`/`DocumentAction` directly.

use std::path::{Path, PathBuf};

use assetact_core::{ActionError, ActionParameters, ActionResult, OutputConfig};

use crate::document::DocumentAction;
use crate::image::ImageAction;

/// A file kind that can run its list of actions.
pub trait FileStrategy {
    fn act(&self) -> Result<Vec<ActionResult>, ActionError>;
}

/// Runs image actions against one source image.
pub struct ImageFile {
    path: PathBuf,
    actions: Vec<ActionParameters>,
    config: OutputConfig,
}

impl ImageFile {
    pub fn new(
        path: impl Into<PathBuf>,
        actions: Vec<ActionParameters>,
        config: OutputConfig,
    ) -> Self {
        Self {
            path: path.into(),
            actions,
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileStrategy for ImageFile {
    fn act(&self) -> Result<Vec<ActionResult>, ActionError> {
        let action = ImageAction::new(self.config.clone());
        let mut results = Vec::with_capacity(self.actions.len());

        for params in &self.actions {
            results.push(action.act(&self.path, params)?);
        }

        Ok(results)
    }
}

/// Runs document actions against one source file.
pub struct DocumentFile {
    path: PathBuf,
    actions: Vec<ActionParameters>,
    config: OutputConfig,
}

impl DocumentFile {
    pub fn new(
        path: impl Into<PathBuf>,
        actions: Vec<ActionParameters>,
        config: OutputConfig,
    ) -> Self {
        Self {
            path: path.into(),
            actions,
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileStrategy for DocumentFile {
    fn act(&self) -> Result<Vec<ActionResult>, ActionError> {
        let action = DocumentAction::new(self.config.clone());
        let mut results = Vec::with_capacity(self.actions.len());

        for params in &self.actions {
            results.push(action.act(&self.path, params)?);
        }

        Ok(results)
    }
}
