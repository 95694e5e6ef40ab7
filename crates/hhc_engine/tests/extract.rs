use hhc_engine::{BodyExtractor, BodyTags, Extractor};
use pretty_assertions::assert_eq;

#[test]
fn extracts_between_body_tags_case_insensitively() {
    let text = "<HTML><HEAD><meta name=\"GENERATOR\"></HEAD><BODY bgcolor=\"#fff\">\n<UL></UL>\n</BODY></HTML>";
    let extracted = BodyExtractor.extract(text);
    assert_eq!(extracted.body, BodyTags::Complete);
    assert_eq!(extracted.content, "\n<UL></UL>\n");
}

#[test]
fn missing_body_uses_whole_document() {
    let text = "<object type=\"text/sitemap\"></object>";
    let extracted = BodyExtractor.extract(text);
    assert_eq!(extracted.body, BodyTags::Missing);
    assert_eq!(extracted.content, text);
}

#[test]
fn unclosed_body_runs_to_end() {
    let extracted = BodyExtractor.extract("<head></head><body><ul><li>x</li></ul>");
    assert_eq!(extracted.body, BodyTags::Unclosed);
    assert_eq!(extracted.content, "<ul><li>x</li></ul>");
}

#[test]
fn body_like_tag_names_are_not_matched() {
    let text = "<bodyguard>x</bodyguard>";
    let extracted = BodyExtractor.extract(text);
    assert_eq!(extracted.body, BodyTags::Missing);
    assert_eq!(extracted.content, text);
}

#[test]
fn body_tag_without_closing_bracket_is_ignored() {
    let text = "<body class=\"x\"";
    assert_eq!(BodyExtractor.extract(text).body, BodyTags::Missing);
}

#[test]
fn non_ascii_content_keeps_byte_offsets() {
    let extracted = BodyExtractor.extract("<title>目录</title><Body>第一章</bOdY>");
    assert_eq!(extracted.content, "第一章");
}
