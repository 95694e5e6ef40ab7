//! `hhc2html`: turn a decompiled CHM directory into a browsable frameset.
mod cli;
mod logging;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use hhc_engine::Converter;
use hhc_logging::hhc_error;

use cli::Args;
use settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::initialize(args.verbose, settings.log_file.as_deref());

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            hhc_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, settings: Settings) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => cli::prompt_for_dir(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let config = settings.to_config()?;

    println!("\nConverting HHC/HHK files...");
    let summary = Converter::new(config).run(&dir)?;
    let Some(entry) = summary.entry_page.as_ref() else {
        bail!("no entry page was written under {}", summary.root.display());
    };
    println!(
        "\nDone ({} of 2 sitemaps converted, {} warnings). Open:\n{}",
        summary.converted_count(),
        summary.warnings().len(),
        entry.display()
    );
    println!(
        "Tip: browsers often block framed file:// pages; if it does not load, serve {} over a local HTTP server (e.g. `python -m http.server`).",
        summary.root.display()
    );
    Ok(())
}
