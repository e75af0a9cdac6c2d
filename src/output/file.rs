use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{PosterError, PosterResult};

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> PosterResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Replace `path` with `document`.
///
/// The text goes to a sibling temp file that is renamed over the target once fully
/// written, so a failure never leaves a half-written poster where a valid one was.
pub fn write_output(path: &Path, document: &str) -> PosterResult<()> {
    let file_name = path.file_name().ok_or_else(|| {
        PosterError::validation(format!("output path '{}' has no file name", path.display()))
    })?;
    ensure_parent_dir(path)?;

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    let mut guard = TempFileGuard(Some(tmp_path.clone()));
    {
        let mut f = std::fs::File::create(&tmp_path)
            .with_context(|| format!("create temp file '{}'", tmp_path.display()))?;
        f.write_all(document.as_bytes())
            .with_context(|| format!("write temp file '{}'", tmp_path.display()))?;
        f.sync_all()
            .with_context(|| format!("sync temp file '{}'", tmp_path.display()))?;
    }
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("replace '{}'", path.display()))?;
    guard.0 = None;

    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/file.rs"]
mod tests;
