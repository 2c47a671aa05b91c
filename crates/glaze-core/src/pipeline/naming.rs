//! Destination resolution and the source-collision guard.

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::types::ExportJob;

/// Marker appended to a file stem when the resolved destination would
/// overwrite its own source.
pub const COPY_MARKER: &str = "_copy";

/// A resolved output location for one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Final path to write to.
    pub path: PathBuf,

    /// Whether the name gained the `_copy` marker.
    pub renamed: bool,
}

/// Resolves output paths and enforces the no-overwrite invariant.
pub struct OutputNamer;

impl OutputNamer {
    /// Resolve the destination for `source` under the job's output settings.
    ///
    /// The output directory is the job's explicit override or a `dir_name`
    /// directory next to the source; it is created recursively and is fine
    /// to already exist. The file name is `<stem><suffix>.<ext>`. When the
    /// resolved destination names the source file itself, the stem gains
    /// [`COPY_MARKER`] (after the suffix, before the extension) and the
    /// destination is flagged as renamed.
    pub fn resolve(source: &Path, job: &ExportJob) -> Result<Destination, ExportError> {
        let out_dir = match &job.output_dir {
            Some(dir) => dir.clone(),
            None => source
                .parent()
                .unwrap_or(Path::new("."))
                .join(&job.dir_name),
        };

        std::fs::create_dir_all(&out_dir).map_err(|e| ExportError::CreateDir {
            dir: out_dir.clone(),
            message: e.to_string(),
        })?;

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let ext = source.extension().and_then(|e| e.to_str());

        let named = format!("{stem}{}", job.suffix);
        let path = out_dir.join(Self::file_name(&named, ext));

        if Self::same_file(source, &path) {
            let path = out_dir.join(Self::file_name(&format!("{named}{COPY_MARKER}"), ext));
            return Ok(Destination {
                path,
                renamed: true,
            });
        }

        Ok(Destination {
            path,
            renamed: false,
        })
    }

    fn file_name(stem: &str, ext: Option<&str>) -> String {
        match ext {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem.to_string(),
        }
    }

    /// Whether `source` and `candidate` name the same file.
    ///
    /// Compared through canonicalized parent directories so relative paths
    /// and symlinks cannot defeat the guard. Both parents exist at this
    /// point (the source was validated, the output directory was just
    /// created), so canonicalization only fails if one vanished mid-run;
    /// the comparison then falls back to the lexical paths.
    fn same_file(source: &Path, candidate: &Path) -> bool {
        if source.file_name() != candidate.file_name() {
            return false;
        }
        let source_dir = source.parent().and_then(|p| std::fs::canonicalize(p).ok());
        let candidate_dir = candidate
            .parent()
            .and_then(|p| std::fs::canonicalize(p).ok());
        match (source_dir, candidate_dir) {
            (Some(a), Some(b)) => a == b,
            _ => source == candidate,
        }
    }
}
