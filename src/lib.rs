//! DoxyClean - Doxygen XML Cleaner for Objective-C
//!
//! Post-processes the XML that Doxygen writes for Objective-C sources into a
//! smaller per-object dialect, sorted by kind, with an aggregate index and an
//! optional XHTML rendering styled after Apple's reference documentation.
//!
//! ## Output Layout
//!
//! ```text
//! <outdir>/DoxyCleaned/
//!   xml/
//!     index.xml
//!     Classes/<Name>.xml
//!     Categories/<Name>.xml
//!     Protocols/<Name>.xml
//!   xhtml/                 (with --html)
//!     index.html
//!     css/
//!     Classes/<Name>.html ...
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use doxyclean::{Config, OutputLayout, Pipeline, TemplateSet, create_transformer};
//!
//! let config = Config::default();
//! let layout = OutputLayout::new(input_dir, output_dir, &config.output);
//! let templates = TemplateSet::from_config(&config.transform)?;
//! let transformer = create_transformer(&config.transform);
//! let summary = Pipeline::new(config, transformer, templates, layout)
//!     .with_html(true)
//!     .run()?;
//! ```
//!
//! ## Modules
//!
//! - [`doxygen`]: input file selection and documentation filtering
//! - [`transform`]: external XSLT engine abstraction
//! - [`pipeline`]: classification, relocation, index, rendering
//! - [`storage`]: output directories and style assets
//! - [`config`]: layered configuration

pub mod cli;
pub mod config;
pub mod doxygen;
pub mod pipeline;
pub mod storage;
pub mod transform;
pub mod types;

// Configuration
pub use config::{Config, ConfigLoader, ErrorPolicy, UnknownKindPolicy};

// Error Types
pub use types::{DocObject, DoxyError, ObjectKind, Result};

// Pipeline
pub use pipeline::{OutputLayout, Pipeline, RunSummary};

// Transform
pub use transform::{
    FnTransformer, SharedTransformer, TemplateSet, Transformer, XsltProc, create_transformer,
};
