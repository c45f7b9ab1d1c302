//! Clean Command
//!
//! Resolves configuration, runs the pipeline, prints the summary.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::pipeline::{OutputLayout, Pipeline, RunSummary};
use crate::transform::{TemplateSet, create_transformer};
use crate::types::{DoxyError, Result};

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub html: bool,
    pub config: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub engine: Option<String>,
}

pub fn run(options: CleanOptions) -> Result<RunSummary> {
    let cwd = std::env::current_dir()?;
    let input = options.input.unwrap_or_else(|| cwd.clone());
    let output = options.output.unwrap_or(cwd);

    if !input.exists() {
        return Err(DoxyError::InputNotFound { path: input });
    }

    let mut config = ConfigLoader::load(options.config.as_deref())?;
    if let Some(dir) = options.templates {
        config.transform.template_dir = Some(dir);
    }
    if let Some(engine) = options.engine {
        config.transform.engine = engine;
    }
    config.validate()?;

    let templates = TemplateSet::from_config(&config.transform)?;
    templates.verify(options.html)?;
    debug!("Using templates: {:?}", templates);

    let layout = OutputLayout::new(&input, &output, &config.output);
    let transformer = create_transformer(&config.transform);

    let summary = Pipeline::new(config, transformer, templates, layout)
        .with_html(options.html)
        .run()?;

    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    let out = Output::new();

    out.heading("DoxyClean");
    out.count(summary.scanned, "files scanned");
    out.count(summary.undocumented, "undocumented, skipped");
    out.count(summary.unknown_kind, "of unknown kind, skipped");
    out.count(summary.cleaned.len(), "objects cleaned");
    if let Some(index_html) = &summary.index_html {
        out.count(summary.rendered, "pages rendered");
        out.written("Index", index_html);
    } else {
        out.written("Index", &summary.index_path);
    }

    for failure in &summary.failures {
        out.failure(&failure.file, &failure.message);
    }
    if !summary.is_success() {
        out.warning(&format!("{} objects failed", summary.failures.len()));
    }
}
