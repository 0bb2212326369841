//! mdfrag - Markdown to HTML fragment converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mdfrag_core::{Conversion, convert_file, write_toc_json};

use crate::config::{CliError, FileConfig, RunPlan};

mod config;
mod logger;

/// Number of TOC titles shown after a conversion.
const TOC_PREVIEW_LEN: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "mdfrag")]
#[command(version, about = "Convert a Markdown document to an HTML fragment", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdfrag notes.md notes.html                   Convert a document
    mdfrag notes.md notes.html --toc-json toc.json
    mdfrag --config site.yaml -v                 Paths and options from YAML")]
struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// HTML fragment to write
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// YAML file with paths, badges, anchor levels and TOC level
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the table of contents as JSON
    #[arg(long, value_name = "FILE")]
    toc_json: Option<PathBuf>,

    /// Suppress the summary and all but error logs
    #[arg(short, long)]
    quiet: bool,

    /// Log progress (-v) or per-step detail (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let plan = RunPlan::resolve(cli.input, cli.output, cli.toc_json, config)?;

    let conversion = convert_file(&plan.input, &plan.output, &plan.options)?;

    if let Some(path) = &plan.toc_json {
        log::info!("Writing TOC to {}", path.display());
        write_toc_json(path, &conversion.toc)?;
    }

    if !cli.quiet {
        print_summary(&conversion);
    }
    Ok(())
}

fn print_summary(conversion: &Conversion) {
    println!();
    println!("✓ Conversion complete!");
    println!("✓ {} characters written", conversion.html.chars().count());
    println!("✓ {} TOC items found", conversion.toc.len());

    println!();
    println!("TOC Preview:");
    for entry in conversion.toc.iter().take(TOC_PREVIEW_LEN) {
        println!("  - {}", entry.title);
    }
    if conversion.toc.len() > TOC_PREVIEW_LEN {
        println!("  ... and {} more", conversion.toc.len() - TOC_PREVIEW_LEN);
    }
}
