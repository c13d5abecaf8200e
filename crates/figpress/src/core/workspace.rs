//! Output and scratch directory lifecycle
//!
//! [`ScratchDir::prepare`] runs before any rendering. Dropping the guard
//! removes the scratch directory, whether the run succeeded, failed or
//! unwound.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::core::error::{ReportError, Result};

/// Guard owning the temporary image directory of one run
#[derive(Debug)]
pub struct ScratchDir {
    output_dir: PathBuf,
    image_dir: PathBuf,
}

impl ScratchDir {
    /// Create `output_dir`, then empty and recreate `image_dir`.
    ///
    /// A relative `image_dir` is resolved inside `output_dir`. An image
    /// directory that resolves to `output_dir` or one of its ancestors is
    /// rejected before anything is removed.
    pub fn prepare(output_dir: &Path, image_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)
            .map_err(|e| ReportError::directory_setup(output_dir, e))?;
        let canonical_output = fs::canonicalize(output_dir)
            .map_err(|e| ReportError::directory_setup(output_dir, e))?;

        let image_dir = if image_dir.is_absolute() {
            image_dir.to_path_buf()
        } else {
            output_dir.join(image_dir)
        };

        let resolved = resolve(&canonical_output, &image_dir);
        if canonical_output.starts_with(&resolved) {
            warn!(
                output_dir = %canonical_output.display(),
                image_dir = %resolved.display(),
                "Image directory encloses the output directory"
            );
            return Err(ReportError::directory_setup(
                &image_dir,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "image directory would contain the output directory",
                ),
            ));
        }

        if image_dir.exists() {
            fs::remove_dir_all(&image_dir)
                .map_err(|e| ReportError::directory_setup(&image_dir, e))?;
        }
        fs::create_dir_all(&image_dir).map_err(|e| ReportError::directory_setup(&image_dir, e))?;

        debug!(
            output_dir = %output_dir.display(),
            image_dir = %image_dir.display(),
            "Directories prepared"
        );
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            image_dir,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Path of `file_name` inside the scratch directory
    pub fn image_path(&self, file_name: &str) -> PathBuf {
        self.image_dir.join(file_name)
    }
}

/// Absolute form of `image_dir`, following symlinks when it already exists
fn resolve(canonical_output: &Path, image_dir: &Path) -> PathBuf {
    if let Ok(existing) = fs::canonicalize(image_dir) {
        return existing;
    }
    let joined = if image_dir.is_absolute() {
        image_dir.to_path_buf()
    } else {
        canonical_output.join(image_dir)
    };
    let mut normal = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normal.pop();
            }
            other => normal.push(other),
        }
    }
    normal
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.image_dir.exists() {
            return;
        }
        match fs::remove_dir_all(&self.image_dir) {
            Ok(()) => debug!(image_dir = %self.image_dir.display(), "Scratch directory removed"),
            Err(e) => warn!(
                image_dir = %self.image_dir.display(),
                error = %e,
                "Failed to remove scratch directory"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_both_directories() {
        let root = tempfile::tempdir().unwrap();
        let output = root.path().join("out/nested");
        let scratch = ScratchDir::prepare(&output, Path::new("images")).unwrap();
        assert!(output.is_dir());
        assert!(scratch.image_dir().is_dir());
        assert_eq!(scratch.image_dir(), output.join("images"));
        assert_eq!(scratch.image_path("q1.png"), output.join("images/q1.png"));
    }

    #[test]
    fn test_prepare_empties_stale_scratch() {
        let root = tempfile::tempdir().unwrap();
        let stale = root.path().join("images");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.png"), b"stale").unwrap();

        let scratch = ScratchDir::prepare(root.path(), Path::new("images")).unwrap();
        assert!(!scratch.image_path("old.png").exists());
    }

    #[test]
    fn test_drop_removes_scratch() {
        let root = tempfile::tempdir().unwrap();
        let image_dir = {
            let scratch = ScratchDir::prepare(root.path(), Path::new("images")).unwrap();
            fs::write(scratch.image_path("q1.png"), b"png").unwrap();
            scratch.image_dir().to_path_buf()
        };
        assert!(!image_dir.exists());
        assert!(root.path().is_dir());
    }

    #[test]
    fn test_unwritable_output_is_setup_failure() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = ScratchDir::prepare(&blocker.join("out"), Path::new("images")).unwrap_err();
        assert!(matches!(err, ReportError::DirectorySetupFailure { .. }));
    }

    #[test]
    fn test_image_dir_enclosing_output_rejected() {
        let root = tempfile::tempdir().unwrap();
        let output = root.path().join("thesis");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("thesis.docx"), b"keep me").unwrap();

        for image_dir in [Path::new(""), Path::new("."), Path::new(".."), output.as_path()] {
            let err = ScratchDir::prepare(&output, image_dir).unwrap_err();
            assert!(
                matches!(err, ReportError::DirectorySetupFailure { .. }),
                "{:?} accepted",
                image_dir
            );
        }
        let err = ScratchDir::prepare(&output, root.path()).unwrap_err();
        assert!(matches!(err, ReportError::DirectorySetupFailure { .. }));

        assert_eq!(fs::read(output.join("thesis.docx")).unwrap(), b"keep me");
    }

    #[test]
    fn test_sibling_through_parent_is_allowed() {
        let root = tempfile::tempdir().unwrap();
        let output = root.path().join("out");
        let scratch = ScratchDir::prepare(&output, Path::new("../images")).unwrap();
        assert!(root.path().join("images").is_dir());
        drop(scratch);
        assert!(!root.path().join("images").exists());
        assert!(output.is_dir());
    }
}
