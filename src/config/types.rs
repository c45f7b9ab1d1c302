//! Configuration Types
//!
//! All configuration structures with sensible defaults. The defaults
//! reproduce the classic layout: `interface_*.xml` / `protocol_*.xml` in,
//! `DoxyCleaned/{xml,xhtml}` out, `xsltproc` as the engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{DoxyError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file selection
    pub input: InputConfig,

    /// Output directory layout
    pub output: OutputConfig,

    /// External transform engine and templates
    pub transform: TransformConfig,

    /// Failure handling
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Validate configuration values.
    /// Returns `DoxyError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.input.patterns.is_empty() {
            return Err(DoxyError::Config(
                "input.patterns must contain at least one pattern".to_string(),
            ));
        }

        for pattern in &self.input.patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                DoxyError::Config(format!("Invalid input pattern '{}': {}", pattern, e))
            })?;
        }

        if self.transform.engine.trim().is_empty() {
            return Err(DoxyError::Config(
                "transform.engine must not be empty".to_string(),
            ));
        }

        let names = [
            ("output.root_dir", &self.output.root_dir),
            ("output.xml_dir", &self.output.xml_dir),
            ("output.xhtml_dir", &self.output.xhtml_dir),
            ("output.index_file", &self.output.index_file),
            ("transform.object_template", &self.transform.object_template),
            (
                "transform.object_html_template",
                &self.transform.object_html_template,
            ),
            (
                "transform.index_html_template",
                &self.transform.index_html_template,
            ),
            ("transform.style_dir", &self.transform.style_dir),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(DoxyError::Config(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Input Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File name patterns matched in the input directory (non-recursive)
    pub patterns: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            patterns: vec!["interface_*.xml".to_string(), "protocol_*.xml".to_string()],
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory created under the output root
    pub root_dir: String,

    /// Cleaned XML tree (relative to `root_dir`)
    pub xml_dir: String,

    /// Rendered XHTML tree (relative to `root_dir`)
    pub xhtml_dir: String,

    /// Index file name inside the XML tree
    pub index_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: "DoxyCleaned".to_string(),
            xml_dir: "xml".to_string(),
            xhtml_dir: "xhtml".to_string(),
            index_file: "index.xml".to_string(),
        }
    }
}

// =============================================================================
// Transform Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// XSLT engine executable
    pub engine: String,

    /// Directory holding the templates and style assets.
    /// Defaults to the directory of the running executable.
    pub template_dir: Option<PathBuf>,

    pub object_template: String,
    pub object_html_template: String,
    pub index_html_template: String,

    /// Style asset directory (relative to `template_dir`)
    pub style_dir: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            engine: "xsltproc".to_string(),
            template_dir: None,
            object_template: "object.xslt".to_string(),
            object_html_template: "object2xhtml.xslt".to_string(),
            index_html_template: "index2xhtml.xslt".to_string(),
            style_dir: "css".to_string(),
        }
    }
}

// =============================================================================
// Pipeline Configuration
// =============================================================================

/// What to do when a single object fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log, count as failed, move on to the next file
    #[default]
    Continue,
    /// Stop the run at the first failure
    Abort,
}

/// What to do with an object whose kind is not class, category or protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKindPolicy {
    /// Log a warning and count the file as skipped
    #[default]
    Skip,
    /// Treat the file as failed
    Reject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub on_error: ErrorPolicy,
    pub unknown_kind: UnknownKindPolicy,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.transform.engine, "xsltproc");
        assert_eq!(config.output.root_dir, "DoxyCleaned");
        assert_eq!(config.input.patterns.len(), 2);
        assert_eq!(config.pipeline.on_error, ErrorPolicy::Continue);
        assert_eq!(config.pipeline.unknown_kind, UnknownKindPolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_patterns() {
        let mut config = Config::default();
        config.input.patterns.clear();
        assert!(matches!(config.validate(), Err(DoxyError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let mut config = Config::default();
        config.input.patterns = vec!["interface_[*.xml".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("interface_[*.xml"));
    }

    #[test]
    fn test_validate_rejects_empty_template() {
        let mut config = Config::default();
        config.transform.object_template = " ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("transform.object_template"));
    }
}
