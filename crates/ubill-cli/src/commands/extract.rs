//! Extract command - pull page records out of a bill PDF and export CSV.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use rust_decimal::Decimal;
use ubill_core::{
    ExtractionMode, Field, LineSource, NoPrompt, PdfExtractor, Session, ValuePrompt,
};

use super::load_config;
use crate::output;
use crate::prompt::TermPrompt;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output CSV path (default: <input stem>_data.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Total-energy extraction mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Never prompt; unresolved fields are left empty
    #[arg(long)]
    non_interactive: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Structural inference over the page text
    Automatic,
    /// Every total is entered by the operator
    Manual,
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Automatic => ExtractionMode::Automatic,
            ModeArg::Manual => ExtractionMode::Manual,
        }
    }
}

/// Pauses the progress bar while the operator types a value.
struct SuspendingPrompt {
    inner: TermPrompt,
    pb: ProgressBar,
}

impl ValuePrompt for SuspendingPrompt {
    fn request_text(&mut self, page: u32, field: Field) -> Option<String> {
        self.pb.suspend(|| self.inner.request_text(page, field))
    }

    fn request_number(&mut self, page: u32, field: Field) -> Option<Decimal> {
        self.pb.suspend(|| self.inner.request_number(page, field))
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    // The upfront mode choice: CLI flag wins over config.
    let mode = args
        .mode
        .map(ExtractionMode::from)
        .unwrap_or(config.extraction.default_mode);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;
    let mut extractor =
        PdfExtractor::new().with_min_text_length(config.pdf.min_text_length);
    extractor.load(&data)?;

    debug!("PDF has {} pages", extractor.page_count());

    let prompt: Box<dyn ValuePrompt> = if args.non_interactive {
        Box::new(NoPrompt)
    } else {
        // Suspend the bar so manual-entry prompts render cleanly.
        Box::new(SuspendingPrompt {
            inner: TermPrompt::new(),
            pb: pb.clone(),
        })
    };

    let mut session = Session::new(mode, prompt)
        .with_unknown_name(config.extraction.unknown_name.clone())
        .with_max_pages(config.pdf.max_pages);

    let records = session.process_document_with(&extractor, |page, limit| {
        pb.set_message(format!("Processing page {} of {}", page, limit));
        pb.set_position(10 + (page as u64 * 80) / limit as u64);
    })?;

    pb.set_message("Writing CSV...");
    pb.set_position(95);

    let output_path = args.output.unwrap_or_else(|| default_output_path(&args.input));
    output::write_records(&records, &output_path, &config.output.default_csv_path)?;

    pb.finish_with_message("Done");

    if session.transitioned() {
        eprintln!(
            "{} Automatic extraction failed mid-run; remaining totals were entered manually.",
            style("!").yellow()
        );
    }

    println!(
        "{} Extracted {} page record(s) in {} mode",
        style("✓").green(),
        records.len(),
        session.mode()
    );
    println!(
        "{} Output written to {}",
        style("✓").green(),
        output_path.display()
    );
    if output_path != config.output.default_csv_path {
        println!(
            "{} Copy written to {}",
            style("✓").green(),
            config.output.default_csv_path.display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// `<input stem>_data.csv` next to the current working directory.
fn default_output_path(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("extracted_data");
    PathBuf::from(format!("{}_data.csv", stem))
}
