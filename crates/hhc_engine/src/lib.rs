//! hhc engine: locate, decode, extract, transform and write sitemap pages.
mod config;
mod converter;
mod decode;
mod emit;
mod encoding;
mod extract;
mod frameset;
mod locate;
mod persist;
mod sitemap;
mod types;

pub use config::{ConfigError, ConvertConfig, DEFAULT_SAMPLE_LEN};
pub use converter::Converter;
pub use decode::{decode_source, normalize_newlines, DecodedSource};
pub use emit::PageEmitter;
pub use encoding::{CharsetGuesser, ChardetngGuesser, EncodingResolver};
pub use extract::{BodyExtractor, BodyTags, ExtractedContent, Extractor};
pub use frameset::{FramesetArtifacts, FramesetError, FramesetGenerator};
pub use locate::{locate_converted, locate_sources, SitemapSet};
pub use persist::{AtomicFileWriter, PersistError};
pub use sitemap::{RenderStats, RenderedSitemap, SitemapRenderer};
pub use types::{ConvertError, ConvertedPage, SetupError, SourceDocument};
