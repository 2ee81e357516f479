use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::ReportBuilder;

/// Optional JSON config controlling the probed name lists and layout.
/// Looked up as `envreport.json` in the working directory, then under the
/// user config directory; absent files mean defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub optional: Option<Vec<String>>,
    #[serde(default)]
    pub additional: Vec<String>,
    #[serde(default)]
    pub ncol: Option<usize>,
    #[serde(default)]
    pub text_width: Option<usize>,
    #[serde(default)]
    pub sort: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let project = PathBuf::from("envreport.json");
        if project.exists() {
            return Self::load_from_path(&project);
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("envreport").join("config.json"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ncol == Some(0) {
            bail!("ncol must be greater than 0");
        }

        if let Some(width) = self.text_width {
            if width < 20 {
                bail!("text_width must be at least 20");
            }
        }

        Ok(())
    }

    pub fn to_builder(&self) -> ReportBuilder {
        let mut builder = ReportBuilder::new()
            .core(self.core.clone())
            .additional(self.additional.clone())
            .sort(self.sort);

        if let Some(optional) = &self.optional {
            builder = builder.optional(optional.clone());
        }
        if let Some(ncol) = self.ncol {
            builder = builder.ncol(ncol);
        }
        if let Some(width) = self.text_width {
            builder = builder.text_width(width);
        }

        builder
    }
}
