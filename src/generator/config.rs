//! Strategy configuration for modelgen
//!
//! A `modelgen.toml` in the scanned directory replaces parts of the built-in
//! strategy. Every key is optional:
//!
//! ```toml
//! package_key = "package"
//! max_file_size = 65536
//! header_template = "package {{ package }}\n"
//! content_template_file = "templates/model.go.j2"
//! ```
//!
//! `*_template_file` paths are relative to the config file and win over the
//! inline `*_template` keys.

use super::strategy::TemplateStrategy;
use crate::error::{GenError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the scanned directory
pub const CONFIG_FILE_NAME: &str = "modelgen.toml";

/// Contents of `modelgen.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// Header context key
    pub package_key: Option<String>,
    /// Flush threshold in bytes
    pub max_file_size: Option<usize>,
    /// Inline header template
    pub header_template: Option<String>,
    /// Inline content template
    pub content_template: Option<String>,
    /// Header template file, relative to the config file
    pub header_template_file: Option<PathBuf>,
    /// Content template file, relative to the config file
    pub content_template_file: Option<PathBuf>,
}

impl StrategyConfig {
    /// Resolve into a strategy, reading template files relative to `base_dir`
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] if a referenced template file cannot be
    /// read.
    pub fn into_strategy(self, base_dir: &Path) -> Result<TemplateStrategy> {
        let defaults = TemplateStrategy::default();

        let header_template = match self.header_template_file {
            Some(file) => read_template(&base_dir.join(file))?,
            None => self.header_template.unwrap_or(defaults.header_template),
        };
        let content_template = match self.content_template_file {
            Some(file) => read_template(&base_dir.join(file))?,
            None => self.content_template.unwrap_or(defaults.content_template),
        };

        Ok(TemplateStrategy {
            package_key: self.package_key.unwrap_or(defaults.package_key),
            header_template,
            content_template,
            max_file_size: self.max_file_size.unwrap_or(defaults.max_file_size),
        })
    }
}

/// Load `modelgen.toml` from `dir`
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`GenError::Config`] if the file exists but cannot be read or
/// parsed.
pub fn load_strategy_config(dir: &Path) -> Result<Option<StrategyConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path).map_err(|e| GenError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let config = toml::from_str(&contents).map_err(|e| GenError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Strategy for `dir`: `modelgen.toml` if present, the built-in one otherwise
///
/// # Errors
///
/// See [`load_strategy_config`] and [`StrategyConfig::into_strategy`].
pub fn load_strategy(dir: &Path) -> Result<TemplateStrategy> {
    match load_strategy_config(dir)? {
        Some(config) => {
            tracing::debug!(dir = %dir.display(), "using {CONFIG_FILE_NAME}");
            config.into_strategy(dir)
        }
        None => Ok(TemplateStrategy::default()),
    }
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GenError::Config {
        path: path.to_path_buf(),
        message: format!("cannot read template: {e}"),
    })
}
