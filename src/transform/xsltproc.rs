//! xsltproc engine
//!
//! Runs one synchronous `xsltproc` process per transform. Exit status and
//! the presence of the output file are both checked; stderr is captured and
//! attached to the error.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::{debug, warn};

use super::Transformer;
use crate::types::{DoxyError, Result};

pub struct XsltProc {
    engine: String,
}

impl XsltProc {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
        }
    }

    fn command(&self, template: &Path, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.engine);
        cmd.arg("-o")
            .arg(output)
            .arg(template)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for XsltProc {
    fn default() -> Self {
        Self::new("xsltproc")
    }
}

impl Transformer for XsltProc {
    fn apply(&self, template: &Path, input: &Path, output: &Path) -> Result<()> {
        let start = Instant::now();
        debug!(
            "Running {} on {} with {}",
            self.engine,
            input.display(),
            template.display()
        );

        let result = self
            .command(template, input, output)
            .output()
            .map_err(|e| DoxyError::TransformSpawn {
                engine: self.engine.clone(),
                source: e,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();

        if !result.status.success() {
            return Err(DoxyError::transform(
                template,
                input,
                Some(result.status),
                stderr,
            ));
        }

        if !output.exists() {
            return Err(DoxyError::transform(template, input, None, stderr));
        }

        if !stderr.trim().is_empty() {
            warn!("{} reported on {}: {}", self.engine, input.display(), stderr.trim());
        }

        debug!(
            "Wrote {} in {}ms",
            output.display(),
            start.elapsed().as_millis()
        );

        Ok(())
    }

    fn name(&self) -> &str {
        &self.engine
    }
}
