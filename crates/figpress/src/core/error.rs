//! Core error types for report generation
//!
//! Two of the variants are scoped to a single record and are turned into an
//! inline placeholder by the pipeline. The rest abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering records or assembling a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unsupported recipe: {discriminator}")]
    UnsupportedRecipe { discriminator: String },

    #[error("Render error: {message}")]
    RenderFailure { message: String },

    #[error("Assembly error: {message}")]
    AssemblyFailure { message: String },

    #[error("Directory setup failed for {}: {source}", .path.display())]
    DirectorySetupFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content: {message}")]
    InvalidContent { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Create a new unsupported-recipe error
    pub fn unsupported(discriminator: impl Into<String>) -> Self {
        Self::UnsupportedRecipe {
            discriminator: discriminator.into(),
        }
    }

    /// Create a new render error
    pub fn render_failure(message: impl Into<String>) -> Self {
        Self::RenderFailure {
            message: message.into(),
        }
    }

    /// Create a new assembly error
    pub fn assembly_failure(message: impl Into<String>) -> Self {
        Self::AssemblyFailure {
            message: message.into(),
        }
    }

    /// Create a new directory setup error
    pub fn directory_setup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectorySetupFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid-content error
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Whether the failure only affects the record that raised it
    pub fn is_record_scoped(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedRecipe { .. } | Self::RenderFailure { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_recipe() {
        let error = ReportError::unsupported("pie3d");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unsupported recipe"));
        assert!(error_msg.contains("pie3d"));
        assert!(error.is_record_scoped());
    }

    #[test]
    fn test_render_failure() {
        let error = ReportError::render_failure("pixmap allocation failed");
        assert_eq!(error.to_string(), "Render error: pixmap allocation failed");
        assert!(error.is_record_scoped());
    }

    #[test]
    fn test_assembly_failure_is_fatal() {
        let error = ReportError::assembly_failure("disk full");
        assert!(error.to_string().contains("Assembly error"));
        assert!(!error.is_record_scoped());
    }

    #[test]
    fn test_directory_setup_failure() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ReportError::directory_setup("/locked/out", source);
        let error_msg = error.to_string();
        assert!(error_msg.contains("/locked/out"));
        assert!(error_msg.contains("denied"));
        assert!(!error.is_record_scoped());
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: ReportError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
