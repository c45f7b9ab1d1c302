use std::env;
use std::path::{Path, PathBuf};

use crate::config::TransformConfig;
use crate::types::{DoxyError, Result};

/// Resolved stylesheet and asset locations
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Doxygen XML -> cleaned object XML
    pub object: PathBuf,
    /// Cleaned object XML -> XHTML page
    pub object_html: PathBuf,
    /// Index XML -> XHTML index page
    pub index_html: PathBuf,
    /// Static assets copied next to the XHTML pages
    pub style_dir: PathBuf,
}

impl TemplateSet {
    /// Resolve every template under `dir`
    pub fn in_dir(dir: &Path, config: &TransformConfig) -> Self {
        Self {
            object: dir.join(&config.object_template),
            object_html: dir.join(&config.object_html_template),
            index_html: dir.join(&config.index_html_template),
            style_dir: dir.join(&config.style_dir),
        }
    }

    /// Resolve from config, falling back to the executable's directory
    pub fn from_config(config: &TransformConfig) -> Result<Self> {
        let dir = match &config.template_dir {
            Some(dir) => dir.clone(),
            None => Self::executable_dir()?,
        };
        Ok(Self::in_dir(&dir, config))
    }

    /// Check the templates a run will need before any file is touched
    pub fn verify(&self, html: bool) -> Result<()> {
        let mut required = vec![&self.object];
        if html {
            required.push(&self.object_html);
            required.push(&self.index_html);
        }

        for path in required {
            if !path.is_file() {
                return Err(DoxyError::Config(format!(
                    "Template not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    fn executable_dir() -> Result<PathBuf> {
        let exe = env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            DoxyError::Config(format!(
                "Cannot determine template directory from {}",
                exe.display()
            ))
        })
    }
}
