/// Which `<body>` tags were found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTags {
    Complete,
    /// Opening tag without `</body>`: content runs to the end.
    Unclosed,
    /// No opening tag: the whole document is content.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub content: String,
    pub body: BodyTags,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, text: &str) -> ExtractedContent;
}

/// Tolerant `<body>` isolation over decoded text:
/// - everything between the end of `<body ...>` and `</body>`
/// - to the end of the document if `</body>` is missing
/// - the whole document if `<body>` is missing or never closes its `>`.
///
/// Tag names match ASCII case-insensitively. Input is expected to have
/// normalized line endings.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyExtractor;

impl Extractor for BodyExtractor {
    fn extract(&self, text: &str) -> ExtractedContent {
        // ASCII lowercasing keeps byte offsets valid for `text`.
        let lower = text.to_ascii_lowercase();
        let Some(start) = find_body_content_start(&lower) else {
            return ExtractedContent {
                content: text.to_string(),
                body: BodyTags::Missing,
            };
        };
        match find_tag(&lower[start..], "</body") {
            Some(rel_end) => ExtractedContent {
                content: text[start..start + rel_end].to_string(),
                body: BodyTags::Complete,
            },
            None => ExtractedContent {
                content: text[start..].to_string(),
                body: BodyTags::Unclosed,
            },
        }
    }
}

fn find_body_content_start(lower: &str) -> Option<usize> {
    let open = find_tag(lower, "<body")?;
    let close = lower[open..].find('>')?;
    Some(open + close + 1)
}

/// Position of `tag` when followed by `>`, `/` or whitespace (so `<bodyx>` does not match).
fn find_tag(lower: &str, tag: &str) -> Option<usize> {
    lower.match_indices(tag).map(|(idx, _)| idx).find(|&idx| {
        match lower.as_bytes().get(idx + tag.len()) {
            Some(b) => *b == b'>' || *b == b'/' || b.is_ascii_whitespace(),
            None => false,
        }
    })
}
