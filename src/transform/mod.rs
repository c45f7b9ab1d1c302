//! External Transform Abstraction
//!
//! All structural rewriting is delegated to an XSLT engine. The
//! [`Transformer`] trait is the seam between the pipeline and that engine:
//! one template, one input file, one output file per call.
//!
//! ## Modules
//!
//! - `xsltproc`: process-backed engine (`xsltproc -o <out> <template> <in>`)
//! - `templates`: resolution of the three stylesheets and the style assets

mod templates;
mod xsltproc;

pub use templates::TemplateSet;
pub use xsltproc::XsltProc;

use std::path::Path;
use std::sync::Arc;

use crate::config::TransformConfig;
use crate::types::{DoxyError, Result};

/// Applies a stylesheet to one input document.
///
/// Implementations must return an error when the engine fails or does not
/// produce `output`. Diagnostics printed on success are logged by the
/// implementation.
pub trait Transformer: Send + Sync {
    fn apply(&self, template: &Path, input: &Path, output: &Path) -> Result<()>;

    /// Engine name for logging
    fn name(&self) -> &str;
}

pub type SharedTransformer = Arc<dyn Transformer>;

/// Create the configured engine
pub fn create_transformer(config: &TransformConfig) -> SharedTransformer {
    Arc::new(XsltProc::new(config.engine.clone()))
}

/// Transformer backed by a closure.
///
/// Lets the pipeline run against an in-process transform, e.g. when the
/// rewriting is done by another library or stubbed out in tests.
pub struct FnTransformer<F> {
    name: String,
    f: F,
}

impl<F> FnTransformer<F>
where
    F: Fn(&Path, &Path, &Path) -> Result<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Transformer for FnTransformer<F>
where
    F: Fn(&Path, &Path, &Path) -> Result<()> + Send + Sync,
{
    fn apply(&self, template: &Path, input: &Path, output: &Path) -> Result<()> {
        (self.f)(template, input, output)?;

        if !output.exists() {
            return Err(DoxyError::transform(template, input, None, ""));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
