use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSource {
    /// Decoded text with `\n` line endings only.
    pub text: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode with `encoding`, letting a BOM override it. Never fails.
pub fn decode_source(bytes: &[u8], encoding: &'static Encoding) -> DecodedSource {
    let (text, used, had_errors) = encoding.decode(bytes);
    DecodedSource {
        text: normalize_newlines(&text),
        encoding_label: used.name().to_string(),
        had_errors,
    }
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
