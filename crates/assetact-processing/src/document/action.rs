//! Document action - single-entry zip archiving
//!
//! Wraps the source file into a zip archive at a freshly allocated path.
//! Archive open and write failures surface as typed errors; a result is only
//! returned once the archive has actually been finalized on disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use assetact_core::{ActionError, ActionParameters, ActionResult, OutputConfig};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::output;

/// Applies one parameter set to one source file, producing a single-entry
/// zip archive.
pub struct DocumentAction {
    config: OutputConfig,
}

impl DocumentAction {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Archive the source file and return the result descriptor.
    pub fn act(
        &self,
        source_path: &Path,
        params: &ActionParameters,
    ) -> Result<ActionResult, ActionError> {
        let output_path = output::allocate(&self.config, source_path, &params.name, "zip")?;

        let data =
            fs::read(source_path).map_err(|source| ActionError::io(source_path, source))?;
        let entry_name = sanitize_entry_name(source_path);

        let file = File::create(&output_path)
            .map_err(|e| ActionError::archive(&output_path, e.to_string()))?;
        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        zip.start_file(entry_name.as_str(), options)
            .map_err(|e| ActionError::archive(&output_path, e.to_string()))?;
        zip.write_all(&data)
            .map_err(|e| ActionError::archive(&output_path, e.to_string()))?;
        zip.finish()
            .map_err(|e| ActionError::archive(&output_path, e.to_string()))?;

        tracing::debug!(
            source = %source_path.display(),
            output = %output_path.display(),
            entry = %entry_name,
            "Document archived"
        );

        Ok(ActionResult {
            name: params.name.clone(),
            path: output_path,
        })
    }
}

/// Archive entry name: base name only, so a source path can never smuggle
/// traversal components into the archive.
fn sanitize_entry_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or("asset")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn config(tmp: &tempfile::TempDir) -> OutputConfig {
        OutputConfig::with_root(tmp.path().join("work"))
    }

    #[test]
    fn test_sanitize_entry_name() {
        assert_eq!(sanitize_entry_name(Path::new("../../etc/passwd")), "passwd");
        assert_eq!(sanitize_entry_name(Path::new("report.pdf")), "report.pdf");
        assert_eq!(sanitize_entry_name(Path::new("..")), "asset");
    }

    #[test]
    fn test_act_produces_single_entry_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("report.pdf");
        fs::write(&source, b"pdf contents here").unwrap();

        let params = ActionParameters {
            name: "archived".into(),
            ..ActionParameters::default()
        };
        let result = DocumentAction::new(config(&tmp)).act(&source, &params).unwrap();

        assert_eq!(result.name, "archived");
        let file_name = result.path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("report-"));
        assert!(file_name.ends_with("-archived.zip"));

        let mut archive = zip::ZipArchive::new(File::open(&result.path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);

        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "report.pdf");
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"pdf contents here");
    }

    #[test]
    fn test_act_missing_source_is_an_error_not_a_phantom_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = DocumentAction::new(config(&tmp))
            .act(&tmp.path().join("absent.pdf"), &ActionParameters::default())
            .unwrap_err();
        assert!(matches!(err, ActionError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_act_unwritable_output_surfaces_archive_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("doc.txt");
        fs::write(&source, b"x").unwrap();

        // A file where the working root should be makes creation fail.
        let blocked = tmp.path().join("blocked");
        fs::write(&blocked, b"").unwrap();

        let err = DocumentAction::new(OutputConfig::with_root(&blocked))
            .act(&source, &ActionParameters::default())
            .unwrap_err();
        assert!(
            matches!(err, ActionError::OutputDir { .. } | ActionError::Archive { .. }),
            "got {err:?}"
        );
    }
}
