//! Application configuration.
//!
//! Read from a JSON file given with `--config` or `TASKHELPER_CONFIG`.
//! Every field is optional:
//! - `catalog_path` - JSON catalog to use instead of the built-in sample.
//!   `TASKHELPER_CATALOG` overrides it.
//! - `notifications` - notification display defaults.
//! - `budget_min`, `budget_max`, `max_images`, `max_image_bytes` - form limits.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TaskhelperError;
use crate::form::FormLimits;
use crate::notify::NotificationConfig;

pub const CONFIG_ENV: &str = "TASKHELPER_CONFIG";
pub const CATALOG_ENV: &str = "TASKHELPER_CATALOG";
pub const LOG_ENV: &str = "TASKHELPER_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub notifications: NotificationConfig,
    #[serde(flatten)]
    pub limits: FormLimits,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, TaskhelperError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TaskhelperError::config(format!("Cannot read config {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| TaskhelperError::config(format!("Invalid config {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path first, then `TASKHELPER_CONFIG`, then defaults. The
    /// catalog path is overridden by `TASKHELPER_CATALOG` when set.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, TaskhelperError> {
        let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if let Some(catalog) = env::var_os(CATALOG_ENV).filter(|v| !v.is_empty()) {
            config.catalog_path = Some(PathBuf::from(catalog));
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), TaskhelperError> {
        if self.limits.budget_min > self.limits.budget_max {
            return Err(TaskhelperError::config(format!(
                "budget_min ({}) exceeds budget_max ({})",
                self.limits.budget_min, self.limits.budget_max
            )));
        }
        if self.limits.max_images == 0 {
            return Err(TaskhelperError::config("max_images must be at least 1"));
        }
        Ok(())
    }
}
