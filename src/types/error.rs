//! Unified Error Type System
//!
//! Centralized error type for the whole crate. Every fallible operation
//! returns [`Result`], and each variant carries the path or template that
//! produced it so a failed run can be traced back to a single file.
//!
//! ## Error Groups
//!
//! - **System**: IO, per-file read and XML parse/write failures
//! - **Layout**: directory conflicts and missing input directories
//! - **Document**: malformed transform output and unknown object kinds
//! - **Transform**: external engine failures with captured diagnostics

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DoxyError {
    // -------------------------------------------------------------------------
    // System Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input or cleaned document could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Layout Errors
    // -------------------------------------------------------------------------
    /// A non-directory sits where a directory is required
    #[error("A file with the same name as the desired directory already exists: {path}")]
    Conflict { path: PathBuf },

    #[error("Input path does not exist: {path}")]
    InputNotFound { path: PathBuf },

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    #[error("Malformed document {path}: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    #[error("Unknown object kind '{kind}' in {path}")]
    UnknownKind { path: PathBuf, kind: String },

    // -------------------------------------------------------------------------
    // Transform Errors
    // -------------------------------------------------------------------------
    /// Engine ran but did not produce its output
    #[error("Transform {template} failed on {input} ({status}): {stderr}")]
    Transform {
        template: PathBuf,
        input: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("Failed to spawn transform engine '{engine}': {source}. Is it installed?")]
    TransformSpawn {
        engine: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DoxyError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl DoxyError {
    /// Create a malformed document error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn xml(path: impl Into<PathBuf>, source: roxmltree::Error) -> Self {
        Self::Xml {
            path: path.into(),
            source,
        }
    }

    /// Create a transform error from a finished process
    pub fn transform(
        template: impl Into<PathBuf>,
        input: impl Into<PathBuf>,
        status: Option<ExitStatus>,
        stderr: impl Into<String>,
    ) -> Self {
        let stderr = stderr.into();
        Self::Transform {
            template: template.into(),
            input: input.into(),
            status: status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "no output produced".to_string()),
            stderr: if stderr.trim().is_empty() {
                "(no diagnostic output)".to_string()
            } else {
                stderr.trim().to_string()
            },
        }
    }

    /// Errors tied to one object file, which the pipeline may skip past.
    /// Layout and config errors always end the run.
    pub fn is_per_object(&self) -> bool {
        matches!(
            self,
            Self::Read { .. }
                | Self::Xml { .. }
                | Self::MalformedDocument { .. }
                | Self::UnknownKind { .. }
                | Self::Transform { .. }
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display_names_path() {
        let err = DoxyError::Conflict {
            path: PathBuf::from("out/xml"),
        };
        assert!(err.to_string().contains("out/xml"));
    }

    #[test]
    fn test_transform_without_stderr() {
        let err = DoxyError::transform("object.xslt", "interface_Foo.xml", None, "  \n");
        let msg = err.to_string();
        assert!(msg.contains("object.xslt"));
        assert!(msg.contains("interface_Foo.xml"));
        assert!(msg.contains("no output produced"));
        assert!(msg.contains("(no diagnostic output)"));
    }

    #[test]
    fn test_per_object_classification() {
        assert!(DoxyError::malformed("a.xml", "no name").is_per_object());
        assert!(
            DoxyError::UnknownKind {
                path: "a.xml".into(),
                kind: "struct".into()
            }
            .is_per_object()
        );
        assert!(
            !DoxyError::Conflict {
                path: "out".into()
            }
            .is_per_object()
        );
        assert!(!DoxyError::Config("bad".into()).is_per_object());
        assert!(!DoxyError::Io(std::io::Error::other("disk")).is_per_object());
    }

    #[test]
    fn test_read_error_names_path_and_is_per_object() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err = DoxyError::read("in/interface_Bad.xml", source);
        assert!(err.is_per_object());
        assert!(err.to_string().contains("in/interface_Bad.xml"));
    }
}
