//! Optional RON settings file merged under the command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hhc_engine::ConvertConfig;
use serde::Deserialize;

use crate::cli::Args;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub fallback_encoding: Option<String>,
    pub sample_bytes: Option<usize>,
    pub content_target: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        ron::from_str(&text)
            .with_context(|| format!("failed to parse settings in {}", path.display()))
    }

    /// Settings file (if any) overridden by explicit flags.
    pub fn resolve(args: &Args) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.override_with(args))
    }

    fn override_with(mut self, args: &Args) -> Self {
        if let Some(label) = &args.fallback_encoding {
            self.fallback_encoding = Some(label.clone());
        }
        if let Some(bytes) = args.sample_bytes {
            self.sample_bytes = Some(bytes);
        }
        if let Some(path) = &args.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    pub fn to_config(&self) -> Result<ConvertConfig> {
        let mut config = ConvertConfig::default();
        if let Some(label) = &self.fallback_encoding {
            config = config.with_fallback_label(label)?;
        }
        if let Some(bytes) = self.sample_bytes {
            config = config.with_sample_len(bytes)?;
        }
        if let Some(target) = &self.content_target {
            config.content_target = target.clone();
        }
        Ok(config)
    }
}
