//! Pages command - dump the text lines extracted for each page.
//!
//! Operator aid for manual mode: shows exactly what the recognizers
//! see, so a total can be read off the page by eye.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use ubill_core::{LineSource, PdfExtractor};

/// Arguments for the pages command.
#[derive(Args)]
pub struct PagesArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Only show this page (1-indexed)
    #[arg(short, long)]
    page: Option<u32>,
}

pub fn run(args: PagesArgs) -> anyhow::Result<()> {
    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    let page_count = extractor.page_count();
    let pages: Vec<u32> = match args.page {
        Some(page) if page == 0 || page > page_count => {
            anyhow::bail!("invalid page number: {} (document has {} pages)", page, page_count)
        }
        Some(page) => vec![page],
        None => (1..=page_count).collect(),
    };

    for page in pages {
        println!("{}", style(format!("--- page {} ---", page)).bold());
        for line in extractor.page_lines(page)? {
            println!("{}", line);
        }
    }

    Ok(())
}
