use std::fs;
use std::path::{Path, PathBuf};

use hhc_core::{FileOutcome, RunSummary, SitemapKind};
use hhc_logging::{hhc_debug, hhc_error, hhc_info, hhc_warn};

use crate::config::ConvertConfig;
use crate::decode::decode_source;
use crate::emit::{parent_dir, PageEmitter};
use crate::encoding::{CharsetGuesser, EncodingResolver};
use crate::extract::{BodyExtractor, BodyTags, Extractor};
use crate::frameset::FramesetGenerator;
use crate::locate::{locate_converted, locate_sources, SitemapSet};
use crate::sitemap::SitemapRenderer;
use crate::{ConvertError, ConvertedPage, SetupError, SourceDocument};

/// Runs the whole pipeline: encoding -> extraction -> object transform -> page.
pub struct Converter {
    resolver: EncodingResolver,
    extractor: Box<dyn Extractor>,
    renderer: SitemapRenderer,
    emitter: PageEmitter,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        let resolver = EncodingResolver::new(&config);
        Self::with_resolver(config, resolver)
    }

    pub fn with_guesser(config: ConvertConfig, guesser: impl CharsetGuesser + 'static) -> Self {
        let resolver = EncodingResolver::with_guesser(guesser, &config);
        Self::with_resolver(config, resolver)
    }

    fn with_resolver(config: ConvertConfig, resolver: EncodingResolver) -> Self {
        Self {
            resolver,
            extractor: Box::new(BodyExtractor),
            renderer: SitemapRenderer::new(config.content_target),
            emitter: PageEmitter,
        }
    }

    /// Read and decode one sitemap file. Undecodable bytes become U+FFFD.
    pub fn load(&self, path: &Path) -> Result<SourceDocument, ConvertError> {
        let kind = SitemapKind::from_source_path(path)
            .ok_or_else(|| ConvertError::UnsupportedFile(path.to_path_buf()))?;
        let encoding = self.resolver.resolve(path);
        let bytes = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = decode_source(&bytes, encoding);
        if decoded.had_errors {
            hhc_warn!(
                "{} has bytes invalid in {}; replaced with U+FFFD",
                path.display(),
                decoded.encoding_label
            );
        }
        hhc_info!("using encoding {} for {}", decoded.encoding_label, path.display());
        Ok(SourceDocument {
            path: path.to_path_buf(),
            kind,
            encoding_label: decoded.encoding_label,
            text: decoded.text,
        })
    }

    /// Convert one `.hhc`/`.hhk` file into a page written beside it.
    pub fn convert_file(&self, path: &Path) -> Result<ConvertedPage, ConvertError> {
        let document = self.load(path)?;

        let extracted = self.extractor.extract(&document.text);
        match extracted.body {
            BodyTags::Complete => {}
            BodyTags::Unclosed => hhc_warn!(
                "{} has no </body> tag, converting to end of file",
                path.display()
            ),
            BodyTags::Missing => hhc_warn!(
                "{} has no <body> tag, converting the whole file",
                path.display()
            ),
        }

        let rendered = self.renderer.render(&extracted.content, &parent_dir(path));
        hhc_debug!(
            "{}: {} links, {} sections, {} labels, {} empty elements pruned",
            path.display(),
            rendered.stats.links,
            rendered.stats.sections,
            rendered.stats.labels,
            rendered.stats.pruned
        );

        let output = self
            .emitter
            .emit(path, document.kind, &rendered.html)
            .map_err(|source| ConvertError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ConvertedPage {
            source: document.path,
            output,
            kind: document.kind,
            encoding_label: document.encoding_label,
            stats: rendered.stats,
        })
    }

    /// Convert the sitemaps under `root`, then always write the frameset.
    ///
    /// Per-file and frameset failures are logged and recorded in the
    /// summary; only an unusable `root` is an error.
    pub fn run(&self, root: &Path) -> Result<RunSummary, SetupError> {
        let root = prepare_root(root)?;
        let mut summary = RunSummary::new(&root);
        let sources = locate_sources(&root);
        let mut produced = SitemapSet::default();

        for kind in SitemapKind::ALL {
            let Some(source) = sources.get(kind) else {
                hhc_debug!("no .{} file found under {}", kind.extension(), root.display());
                continue;
            };
            hhc_info!("converting {} {}", kind, source.display());
            let outcome = match self.convert_file(source) {
                Ok(page) => {
                    hhc_info!("generated {}", page.output.display());
                    produced.set(kind, page.output.clone());
                    FileOutcome::Converted {
                        source: page.source,
                        output: page.output,
                        encoding: page.encoding_label,
                    }
                }
                Err(err) => {
                    hhc_error!("{}", err);
                    FileOutcome::Failed {
                        source: source.to_path_buf(),
                        reason: err.to_string(),
                    }
                }
            };
            summary.set_outcome(kind, outcome);
        }

        let pages = if produced.contents.is_some() && produced.index.is_some() {
            produced
        } else {
            produced.or(locate_converted(&root))
        };

        match FramesetGenerator::new(&root).generate(&pages) {
            Ok(artifacts) => {
                summary.navigation_source = Some(artifacts.navigation_source);
                summary.entry_page = Some(artifacts.index);
            }
            Err(err) => {
                hhc_error!("{}", err);
                summary.frameset_error = Some(err.to_string());
            }
        }
        Ok(summary)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}

fn prepare_root(root: &Path) -> Result<PathBuf, SetupError> {
    if !root.exists() {
        return Err(SetupError::MissingRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SetupError::NotADirectory(root.to_path_buf()));
    }
    root.canonicalize().map_err(|source| SetupError::Resolve {
        path: root.to_path_buf(),
        source,
    })
}
