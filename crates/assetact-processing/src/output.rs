//! Output path allocation
//!
//! Generated artifacts live under the working root as
//! `<source-basename>-<unix-ts>-<random 0..=1000>-<action-name>.<ext>`,
//! unique per invocation so concurrent and successive actions never collide.

use std::path::{Path, PathBuf};

use assetact_core::{ActionError, OutputConfig};
use rand::Rng;

const RANDOM_SUFFIX_MAX: u32 = 1000;

/// Allocate a collision-resistant output path under the working root,
/// creating the root if absent.
pub fn allocate(
    config: &OutputConfig,
    source_path: &Path,
    action_name: &str,
    extension: &str,
) -> Result<PathBuf, ActionError> {
    config.ensure_root()?;

    let basename = source_basename(source_path);
    let timestamp = chrono::Utc::now().timestamp();
    let suffix = rand::rng().random_range(0..=RANDOM_SUFFIX_MAX);

    let file_name = format!("{basename}-{timestamp}-{suffix}-{action_name}.{extension}");
    Ok(config.root().join(file_name))
}

/// Portion of the source file name before the first `.`.
fn source_basename(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("asset");
    name.split('.').next().unwrap_or(name).to_string()
}
