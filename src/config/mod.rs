//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/doxyclean/config.toml)
//! 3. Project config (./.doxyclean.toml)
//! 4. Environment variables (DOXYCLEAN_*)
//! 5. Explicit `--config` file
//! 6. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
#[cfg(test)]
pub(crate) use loader::ENV_LOCK;
pub use types::*;
