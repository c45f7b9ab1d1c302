//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/doxyclean/config.toml)
//! 3. Project config (./.doxyclean.toml)
//! 4. Environment variables (DOXYCLEAN_* prefix, `__` between sections)
//! 5. An explicit file passed with `--config`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{DoxyError, Result};

pub const ENV_PREFIX: &str = "DOXYCLEAN_";

/// Held by tests that read or write the process environment
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → env vars → explicit file
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // DOXYCLEAN_TRANSFORM__ENGINE -> transform.engine
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DoxyError::Config(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment
            .extract()
            .map_err(|e| DoxyError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DoxyError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/doxyclean/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("doxyclean"))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".doxyclean.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ErrorPolicy, UnknownKindPolicy};
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doxyclean.toml");
        std::fs::write(
            &path,
            r#"
[transform]
engine = "/opt/local/bin/xsltproc"
template_dir = "/usr/share/doxyclean"

[pipeline]
on_error = "abort"
unknown_kind = "reject"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.transform.engine, "/opt/local/bin/xsltproc");
        assert_eq!(
            config.transform.template_dir,
            Some(PathBuf::from("/usr/share/doxyclean"))
        );
        assert_eq!(config.transform.object_template, "object.xslt");
        assert_eq!(config.pipeline.on_error, ErrorPolicy::Abort);
        assert_eq!(config.pipeline.unknown_kind, UnknownKindPolicy::Reject);
        assert_eq!(config.output.xml_dir, "xml");
    }

    #[test]
    fn test_load_from_file_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doxyclean.toml");
        std::fs::write(&path, "[input]\npatterns = []\n").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_file(&path),
            Err(DoxyError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let err = ConfigLoader::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_env_override() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: every test that loads config holds ENV_LOCK
        unsafe {
            std::env::set_var("DOXYCLEAN_OUTPUT__INDEX_FILE", "objects.xml");
        }
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.output.index_file, "objects.xml");
        unsafe {
            std::env::remove_var("DOXYCLEAN_OUTPUT__INDEX_FILE");
        }
    }
}
