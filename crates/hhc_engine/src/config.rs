use encoding_rs::{Encoding, GB18030};
use hhc_core::CONTENT_TARGET;

/// Bytes sampled from the head of a file for charset guessing.
pub const DEFAULT_SAMPLE_LEN: usize = 10_000;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub sample_len: usize,
    /// Used when guessing fails and in place of misdetected Western encodings.
    pub fallback_encoding: &'static Encoding,
    /// Frame name generated links open in.
    pub content_target: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),
    #[error("sample size must be greater than zero")]
    EmptySample,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            sample_len: DEFAULT_SAMPLE_LEN,
            fallback_encoding: GB18030,
            content_target: CONTENT_TARGET.to_string(),
        }
    }
}

impl ConvertConfig {
    pub fn with_fallback_label(mut self, label: &str) -> Result<Self, ConfigError> {
        self.fallback_encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }

    pub fn with_sample_len(mut self, sample_len: usize) -> Result<Self, ConfigError> {
        if sample_len == 0 {
            return Err(ConfigError::EmptySample);
        }
        self.sample_len = sample_len;
        Ok(self)
    }
}
