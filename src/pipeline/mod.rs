//! Cleaning Pipeline
//!
//! Sequential run over one Doxygen output directory:
//!
//! 1. **Scan**: list `interface_*.xml` / `protocol_*.xml`
//! 2. **Filter**: drop files without any written description
//! 3. **Clean**: apply the object template and relocate by kind
//! 4. **Render** (optional): object XHTML pages
//! 5. **Index**: assemble `index.xml` from the relocated tree
//! 6. **Render index** (optional): style assets and `index.html`
//!
//! Each file is handled to completion before the next one starts.

pub mod classify;
pub mod index;
pub mod layout;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{ObjectFields, clean_object, read_object, read_object_fields};
pub use index::{build_index, collect_index, write_index};
pub use layout::OutputLayout;
pub use render::{render_index, render_object};

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::config::{Config, ErrorPolicy, UnknownKindPolicy};
use crate::doxygen::{InputScanner, is_documented};
use crate::storage::ensure_dir;
use crate::transform::{SharedTransformer, TemplateSet};
use crate::types::{DocObject, DoxyError, Result};

/// One object that could not be processed
#[derive(Debug, Clone)]
pub struct Failure {
    pub file: String,
    pub message: String,
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Input files matching the patterns
    pub scanned: usize,
    /// Files without any description
    pub undocumented: usize,
    /// Files skipped for an unrecognized kind
    pub unknown_kind: usize,
    /// Relocated objects, in processing order
    pub cleaned: Vec<DocObject>,
    /// Object pages rendered
    pub rendered: usize,
    pub failures: Vec<Failure>,
    pub index_path: PathBuf,
    pub index_html: Option<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

enum FileOutcome {
    Undocumented,
    UnknownKind,
    Cleaned(DocObject),
}

pub struct Pipeline {
    config: Config,
    transformer: SharedTransformer,
    templates: TemplateSet,
    layout: OutputLayout,
    html: bool,
}

impl Pipeline {
    pub fn new(
        config: Config,
        transformer: SharedTransformer,
        templates: TemplateSet,
        layout: OutputLayout,
    ) -> Self {
        Self {
            config,
            transformer,
            templates,
            layout,
            html: false,
        }
    }

    /// Also render XHTML pages
    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    pub fn run(&self) -> Result<RunSummary> {
        if !self.layout.input_dir.is_dir() {
            return Err(DoxyError::InputNotFound {
                path: self.layout.input_dir.clone(),
            });
        }

        ensure_dir(&self.layout.output_root)?;

        let scanner = InputScanner::new(&self.layout.input_dir, &self.config.input.patterns)?;
        let files = scanner.scan()?;
        info!(
            "Found {} Doxygen files in {} (engine: {})",
            files.len(),
            self.layout.input_dir.display(),
            self.transformer.name()
        );

        let mut summary = RunSummary {
            scanned: files.len(),
            ..Default::default()
        };

        for file in &files {
            match self.process_file(file) {
                Ok(FileOutcome::Undocumented) => summary.undocumented += 1,
                Ok(FileOutcome::UnknownKind) => summary.unknown_kind += 1,
                Ok(FileOutcome::Cleaned(object)) => {
                    if self.html {
                        match self.render(&object) {
                            Ok(()) => summary.rendered += 1,
                            Err(e) => self.record_failure(&mut summary, file, e)?,
                        }
                    }
                    summary.cleaned.push(object);
                }
                Err(e) => self.record_failure(&mut summary, file, e)?,
            }
        }

        summary.index_path = build_index(&self.layout.xml_dir, &self.layout.index_file)?;

        if self.html {
            summary.index_html = Some(render_index(
                self.transformer.as_ref(),
                &self.templates,
                &summary.index_path,
                &self.layout.xhtml_dir,
            )?);
        }

        Ok(summary)
    }

    fn process_file(&self, file: &str) -> Result<FileOutcome> {
        let path = self.layout.input_dir.join(file);
        if !is_documented(&path)? {
            debug!("Skipping undocumented {}", file);
            return Ok(FileOutcome::Undocumented);
        }

        match clean_object(
            self.transformer.as_ref(),
            &self.templates,
            file,
            &self.layout.input_dir,
            &self.layout.xml_dir,
        ) {
            Ok(object) => Ok(FileOutcome::Cleaned(object)),
            Err(DoxyError::UnknownKind { kind, .. })
                if self.config.pipeline.unknown_kind == UnknownKindPolicy::Skip =>
            {
                warn!("Skipping {}: unknown object kind '{}'", file, kind);
                Ok(FileOutcome::UnknownKind)
            }
            Err(e) => Err(e),
        }
    }

    fn render(&self, object: &DocObject) -> Result<()> {
        let output = render_object(
            self.transformer.as_ref(),
            &self.templates,
            object,
            &self.layout.xml_dir,
            &self.layout.xhtml_dir,
        )?;
        debug!("Rendered {}", output.display());
        Ok(())
    }

    /// Record a per-object failure, or end the run if the error is fatal
    /// or the policy says so
    fn record_failure(&self, summary: &mut RunSummary, file: &str, err: DoxyError) -> Result<()> {
        if !err.is_per_object() || self.config.pipeline.on_error == ErrorPolicy::Abort {
            return Err(err);
        }

        error!("Failed to process {}: {}", file, err);
        summary.failures.push(Failure {
            file: file.to_string(),
            message: err.to_string(),
        });
        Ok(())
    }
}
