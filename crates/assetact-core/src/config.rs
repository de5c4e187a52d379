//! Configuration module
//!
//! Output configuration for the action engine: where generated artifacts
//! live. The working root is created on demand and may be shared by
//! concurrent actions.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ActionError;

const ROOT_DIR_DEFAULT: &str = "tmp_action";

/// Working root for generated artifacts.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub root_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(ROOT_DIR_DEFAULT),
        }
    }
}

impl OutputConfig {
    /// Load from the environment, falling back to the default working root.
    pub fn from_env() -> Self {
        let root_dir = env::var("ASSETACT_ROOT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(ROOT_DIR_DEFAULT));

        Self { root_dir }
    }

    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Create the working root if absent. Another action creating it
    /// concurrently is not an error.
    pub fn ensure_root(&self) -> Result<(), ActionError> {
        fs::create_dir_all(&self.root_dir).map_err(|source| ActionError::OutputDir {
            path: self.root_dir.clone(),
            source,
        })
    }
}
