use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

/// Convert decompiled CHM `.hhc`/`.hhk` sitemaps into browsable HTML pages.
#[derive(Debug, Parser)]
#[command(name = "hhc2html", version, long_about = None)]
pub(crate) struct Args {
    /// Decompiled CHM directory; prompted for when omitted.
    pub dir: Option<PathBuf>,

    /// Encoding used when detection fails or guesses a Western codepage.
    #[arg(long, value_name = "LABEL")]
    pub fallback_encoding: Option<String>,

    /// Bytes sampled for encoding detection.
    #[arg(long, value_name = "BYTES")]
    pub sample_bytes: Option<usize>,

    /// RON settings file; command-line flags take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write the log to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Ask for the target directory on `output`, read one line from `input`.
pub(crate) fn prompt_for_dir(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "Enter the full path of the decompiled CHM directory: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read directory from stdin")?;
    // "Copy as path" on Windows wraps the path in quotes.
    let trimmed = line.trim().trim_matches('"').trim();
    if trimmed.is_empty() {
        bail!("no directory given");
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::{prompt_for_dir, Args};
    use clap::Parser;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn prompt_strips_whitespace_and_quotes() {
        let mut input = Cursor::new("  \"/tmp/my chm\"  \n");
        let mut output = Vec::new();
        let dir = prompt_for_dir(&mut input, &mut output).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/my chm"));
        assert!(String::from_utf8(output).unwrap().contains("decompiled CHM directory"));
    }

    #[test]
    fn empty_answer_is_an_error() {
        let mut input = Cursor::new("\n");
        assert!(prompt_for_dir(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from([
            "hhc2html",
            "/chm",
            "--fallback-encoding",
            "big5",
            "--sample-bytes",
            "4096",
            "-vv",
        ]);
        assert_eq!(args.dir, Some(PathBuf::from("/chm")));
        assert_eq!(args.fallback_encoding.as_deref(), Some("big5"));
        assert_eq!(args.sample_bytes, Some(4096));
        assert_eq!(args.verbose, 2);
    }
}
