//! XHTML rendering of relocated objects and of the index.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::storage::{copy_dir_into, ensure_dir};
use crate::transform::{TemplateSet, Transformer};
use crate::types::{DocObject, Result};

/// Render `<xml_dir>/<Subdir>/<name>.xml` to `<xhtml_dir>/<Subdir>/<name>.html`
pub fn render_object(
    transformer: &dyn Transformer,
    templates: &TemplateSet,
    object: &DocObject,
    xml_dir: &Path,
    xhtml_dir: &Path,
) -> Result<PathBuf> {
    ensure_dir(&xhtml_dir.join(object.kind.subdirectory()))?;

    let input = xml_dir.join(object.relative_path("xml"));
    let output = xhtml_dir.join(object.relative_path("html"));
    transformer.apply(&templates.object_html, &input, &output)?;

    Ok(output)
}

/// Copy the style assets into `xhtml_dir` and render `index.html` there
pub fn render_index(
    transformer: &dyn Transformer,
    templates: &TemplateSet,
    index_path: &Path,
    xhtml_dir: &Path,
) -> Result<PathBuf> {
    ensure_dir(xhtml_dir)?;

    if templates.style_dir.is_dir() {
        let copied = copy_dir_into(&templates.style_dir, xhtml_dir)?;
        info!(
            "Copied {} style assets from {}",
            copied,
            templates.style_dir.display()
        );
    } else {
        warn!(
            "Style directory not found, pages will be unstyled: {}",
            templates.style_dir.display()
        );
    }

    let output = xhtml_dir.join("index.html");
    transformer.apply(&templates.index_html, index_path, &output)?;

    info!("Rendered index to {}", output.display());
    Ok(output)
}
