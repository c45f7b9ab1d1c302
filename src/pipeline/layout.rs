use std::path::{Path, PathBuf};

use crate::config::OutputConfig;

/// Every directory a run reads from or writes to.
///
/// Computed once from the CLI/config and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Doxygen XML directory
    pub input_dir: PathBuf,
    /// Destination root given on the command line
    pub output_root: PathBuf,
    /// `<output_root>/DoxyCleaned/xml`
    pub xml_dir: PathBuf,
    /// `<output_root>/DoxyCleaned/xhtml`
    pub xhtml_dir: PathBuf,
    /// Index file name inside `xml_dir`
    pub index_file: String,
}

impl OutputLayout {
    pub fn new(input_dir: &Path, output_root: &Path, config: &OutputConfig) -> Self {
        let base = output_root.join(&config.root_dir);
        Self {
            input_dir: input_dir.to_path_buf(),
            output_root: output_root.to_path_buf(),
            xml_dir: base.join(&config.xml_dir),
            xhtml_dir: base.join(&config.xhtml_dir),
            index_file: config.index_file.clone(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.xml_dir.join(&self.index_file)
    }
}
