use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::types::{DoxyError, Result};

/// Lists Doxygen XML files in a single directory whose names match one of
/// the configured patterns. Subdirectories are not entered.
pub struct InputScanner {
    root: PathBuf,
    patterns: Vec<glob::Pattern>,
}

impl InputScanner {
    pub fn new<P: AsRef<Path>>(root: P, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p)
                    .map_err(|e| DoxyError::Config(format!("Invalid input pattern '{}': {}", p, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            patterns,
        })
    }

    /// Matching file names, sorted
    pub fn scan(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(DoxyError::InputNotFound {
                path: self.root.clone(),
            });
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .max_depth(Some(1))
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            if self.matches(name) {
                files.push(name.to_string());
            }
        }

        Ok(files)
    }

    fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }
}
