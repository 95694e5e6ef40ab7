use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use hhc_logging::{hhc_debug, hhc_warn};

use crate::config::ConvertConfig;

/// Statistical charset guess over a byte sample.
pub trait CharsetGuesser: Send + Sync {
    /// `is_complete` is true when `sample` holds the whole file.
    fn guess(&self, sample: &[u8], is_complete: bool) -> Option<&'static Encoding>;
}

/// BOM -> chardetng detection. An empty sample yields no guess.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetngGuesser;

impl CharsetGuesser for ChardetngGuesser {
    fn guess(&self, sample: &[u8], is_complete: bool) -> Option<&'static Encoding> {
        if sample.is_empty() {
            return None;
        }
        if let Some((encoding, _)) = Encoding::for_bom(sample) {
            return Some(encoding);
        }
        let mut detector = EncodingDetector::new();
        detector.feed(sample, is_complete);
        Some(detector.guess(None, true))
    }
}

/// Picks the encoding a sitemap file is decoded with. Never fails.
pub struct EncodingResolver {
    guesser: Box<dyn CharsetGuesser>,
    fallback: &'static Encoding,
    sample_len: usize,
}

impl EncodingResolver {
    pub fn new(config: &ConvertConfig) -> Self {
        Self::with_guesser(ChardetngGuesser, config)
    }

    pub fn with_guesser(guesser: impl CharsetGuesser + 'static, config: &ConvertConfig) -> Self {
        Self {
            guesser: Box::new(guesser),
            fallback: config.fallback_encoding,
            sample_len: config.sample_len,
        }
    }

    pub fn resolve(&self, path: &Path) -> &'static Encoding {
        match read_sample(path, self.sample_len) {
            Ok((sample, is_complete)) => self.resolve_sample(&sample, is_complete),
            Err(err) => {
                hhc_warn!(
                    "encoding detection failed for {} ({}), falling back to {}",
                    path.display(),
                    err,
                    self.fallback.name()
                );
                self.fallback
            }
        }
    }

    pub fn resolve_sample(&self, sample: &[u8], is_complete: bool) -> &'static Encoding {
        match self.guesser.guess(sample, is_complete) {
            Some(guess) => {
                let resolved = self.normalize(guess);
                hhc_debug!("charset guess {} resolved to {}", guess.name(), resolved.name());
                resolved
            }
            None => {
                hhc_warn!(
                    "charset detection returned nothing, falling back to {}",
                    self.fallback.name()
                );
                self.fallback
            }
        }
    }

    /// windows-1252 (also what ISO-8859-1 maps to) is how CJK bytes usually
    /// get misdetected, so it becomes the fallback; UTFs collapse to UTF-8.
    pub fn normalize(&self, guess: &'static Encoding) -> &'static Encoding {
        if guess == WINDOWS_1252 {
            self.fallback
        } else if guess == UTF_8 || guess == UTF_16LE || guess == UTF_16BE {
            UTF_8
        } else {
            guess
        }
    }
}

fn read_sample(path: &Path, sample_len: usize) -> io::Result<(Vec<u8>, bool)> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(sample_len.min(64 * 1024) + 1);
    file.take(sample_len as u64 + 1).read_to_end(&mut sample)?;
    let is_complete = sample.len() <= sample_len;
    sample.truncate(sample_len);
    Ok((sample, is_complete))
}
